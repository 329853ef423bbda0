//! Texture storage and the raylib-backed asset provider.
//!
//! [`TextureStore`] owns every GPU texture by key. [`TextureLoader`] borrows
//! the raylib handle and the store for the duration of a screen load hook and
//! implements [`AssetProvider`] on top of them.

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::resources::assets::{AssetError, AssetProvider, Drawable, Placeholder};

/// File extensions tried, in order, for a logical asset path.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

/// First existing file for `logical_path` under `root`, probing
/// [`IMAGE_EXTENSIONS`]. A path that already exists as given wins.
pub fn resolve_image_path(root: &Path, logical_path: &str) -> Option<PathBuf> {
    let base = root.join(logical_path);
    if base.is_file() {
        return Some(base);
    }
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| root.join(format!("{}.{}", logical_path, ext)))
        .find(|candidate| candidate.is_file())
}

/// Asset provider that loads files from disk into a [`TextureStore`].
pub struct TextureLoader<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub store: &'a mut TextureStore,
    pub root: &'a Path,
}

impl<'a> TextureLoader<'a> {
    pub fn new(
        rl: &'a mut RaylibHandle,
        thread: &'a RaylibThread,
        store: &'a mut TextureStore,
        root: &'a Path,
    ) -> Self {
        Self {
            rl,
            thread,
            store,
            root,
        }
    }

    fn register(&mut self, key: &str, texture: Texture2D) -> Drawable {
        let drawable = Drawable::new(key, texture.width.max(0) as u32, texture.height.max(0) as u32);
        self.store.insert(key, texture);
        drawable
    }
}

impl AssetProvider for TextureLoader<'_> {
    fn load_image(&mut self, key: &str, logical_path: &str) -> Result<Drawable, AssetError> {
        let path = resolve_image_path(self.root, logical_path).ok_or_else(|| AssetError::NotFound {
            key: key.to_string(),
            path: self.root.join(logical_path).display().to_string(),
        })?;
        let path_str = path.to_string_lossy();
        let texture = self
            .rl
            .load_texture(self.thread, &path_str)
            .map_err(|e| AssetError::Decode {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        info!("Loaded texture '{}' from {}", key, path_str);
        Ok(self.register(key, texture))
    }

    fn create_placeholder(
        &mut self,
        key: &str,
        placeholder: &Placeholder,
    ) -> Result<Drawable, AssetError> {
        let mut image = Image::gen_image_color(
            placeholder.width as i32,
            placeholder.height as i32,
            Color::BLANK,
        );
        for y in 0..placeholder.height {
            for x in 0..placeholder.width {
                let color = placeholder.pixel(x, y);
                if color.a > 0 {
                    image.draw_pixel(x as i32, y as i32, color);
                }
            }
        }
        let texture = self
            .rl
            .load_texture_from_image(self.thread, &image)
            .map_err(|e| AssetError::Decode {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        info!(
            "Created {}x{} placeholder texture '{}'",
            placeholder.width, placeholder.height, key
        );
        Ok(self.register(key, texture))
    }
}
