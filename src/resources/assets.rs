//! Asset provider boundary.
//!
//! Screens load their textures through the [`AssetProvider`] trait during
//! their load hook. The raylib-backed implementation lives in
//! [`crate::resources::texturestore`]; tests substitute an in-memory provider.
//!
//! Missing assets are never fatal. [`load_or_placeholder`] logs the failure
//! and registers a deterministic [`Placeholder`] under the same key, so the
//! rest of the screen code only sees an error when generating the
//! placeholder fails too.

use log::warn;
use raylib::prelude::Color;
use rustc_hash::FxHashMap;
use std::fmt;

/// A texture registered under `key`, with its pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    pub key: String,
    pub width: u32,
    pub height: u32,
}

impl Drawable {
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

/// Fill rule of a generated texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pattern {
    /// Every pixel the same color.
    Solid(Color),
    /// Triangles pointing at each compass letter (`N`, `E`, `S`, `W`) found in
    /// `letters`; everything else transparent.
    Compass { color: Color, letters: &'static str },
}

/// Recipe for a generated stand-in texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
    pub pattern: Pattern,
}

impl Placeholder {
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pattern: Pattern::Solid(color),
        }
    }

    /// Square triangle pattern for a compass asset key such as `"NEE"`.
    pub fn compass(size: u32, color: Color, letters: &'static str) -> Self {
        Self {
            width: size,
            height: size,
            pattern: Pattern::Compass { color, letters },
        }
    }

    /// Color of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        match self.pattern {
            Pattern::Solid(color) => color,
            Pattern::Compass { color, letters } => {
                if compass_pixel(self.width, self.height, letters, x as i64, y as i64) {
                    color
                } else {
                    Color::BLANK
                }
            }
        }
    }
}

fn compass_pixel(width: u32, height: u32, letters: &str, x: i64, y: i64) -> bool {
    let w = width as i64;
    let h = height as i64;
    let half_w = w / 2;
    let half_h = h / 2;
    letters.chars().any(|letter| match letter {
        'N' => y < half_h && x > y && x < w - y,
        'S' => y >= half_h && x > w - y && x < y,
        'E' => x >= half_w && y > h - x && y < x,
        'W' => x < half_w && y > x && y < h - x,
        _ => false,
    })
}

/// Failure to produce a texture.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// No file matched the logical path with any probed extension.
    NotFound { key: String, path: String },
    /// A file was found but could not be decoded or uploaded.
    Decode { key: String, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound { key, path } => {
                write!(f, "asset '{}' not found at '{}'", key, path)
            }
            AssetError::Decode { key, reason } => {
                write!(f, "asset '{}' could not be loaded: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Source of drawable textures.
pub trait AssetProvider {
    /// Load an image from `logical_path` and register it under `key`.
    ///
    /// File extension probing is up to the implementation.
    fn load_image(&mut self, key: &str, logical_path: &str) -> Result<Drawable, AssetError>;

    /// Generate `placeholder` and register it under `key`.
    fn create_placeholder(
        &mut self,
        key: &str,
        placeholder: &Placeholder,
    ) -> Result<Drawable, AssetError>;
}

/// Load `logical_path`, substituting `placeholder` when loading fails.
///
/// The load failure is logged and swallowed. An error is returned only when
/// the placeholder cannot be created either.
pub fn load_or_placeholder(
    assets: &mut dyn AssetProvider,
    key: &str,
    logical_path: &str,
    placeholder: &Placeholder,
) -> Result<Drawable, AssetError> {
    match assets.load_image(key, logical_path) {
        Ok(drawable) => Ok(drawable),
        Err(e) => {
            warn!("{}; using placeholder", e);
            assets.create_placeholder(key, placeholder)
        }
    }
}

/// Headless provider: images "exist" when listed in `files` with a size.
///
/// Every request is recorded so callers can inspect what a screen loaded.
#[derive(Debug, Default)]
pub struct MemoryAssets {
    /// Logical path to image size.
    pub files: FxHashMap<String, (u32, u32)>,
    /// Keys loaded from `files`, in request order.
    pub loaded: Vec<String>,
    /// Keys generated from placeholders, in request order.
    pub placeholders: Vec<(String, Placeholder)>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, logical_path: &str, width: u32, height: u32) -> Self {
        self.files.insert(logical_path.to_string(), (width, height));
        self
    }

    /// The placeholder generated for `key`, if any.
    pub fn placeholder(&self, key: &str) -> Option<&Placeholder> {
        self.placeholders
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }
}

impl AssetProvider for MemoryAssets {
    fn load_image(&mut self, key: &str, logical_path: &str) -> Result<Drawable, AssetError> {
        let (width, height) = self
            .files
            .get(logical_path)
            .copied()
            .ok_or_else(|| AssetError::NotFound {
                key: key.to_string(),
                path: logical_path.to_string(),
            })?;
        self.loaded.push(key.to_string());
        Ok(Drawable::new(key, width, height))
    }

    fn create_placeholder(
        &mut self,
        key: &str,
        placeholder: &Placeholder,
    ) -> Result<Drawable, AssetError> {
        self.placeholders.push((key.to_string(), *placeholder));
        Ok(Drawable::new(key, placeholder.width, placeholder.height))
    }
}
