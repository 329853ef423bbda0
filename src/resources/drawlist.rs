//! Ordered draw commands emitted by screens.
//!
//! Screens never touch the raylib draw handle. They describe each blit as a
//! [`DrawCommand`] and push it onto a [`DrawList`]; the render system replays
//! the list in emission order. This keeps screen rendering testable without a
//! window.

use raylib::prelude::{Color, Rectangle, Vector2};
use smallvec::SmallVec;

/// Where a texture lands on screen.
#[derive(Clone, Copy, Debug)]
pub enum Destination {
    /// Stretch into this screen rectangle. `origin` is in destination pixels.
    Rect(Rectangle),
    /// Place the pivot at this screen position. The source size is multiplied
    /// by `scale` and `origin` is given in source pixels.
    Position(Vector2),
}

/// One texture blit.
#[derive(Clone, Debug)]
pub struct DrawCommand {
    /// Texture key in the texture store.
    pub texture: String,
    pub destination: Destination,
    /// Region of the texture to sample; `None` uses the whole texture.
    pub source: Option<Rectangle>,
    /// Tint, including alpha.
    pub tint: Color,
    /// Rotation in degrees around `origin`.
    pub rotation: f32,
    pub origin: Vector2,
    pub scale: f32,
}

impl DrawCommand {
    /// Whole texture stretched into `rect`, untinted.
    pub fn rect(texture: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            texture: texture.into(),
            destination: Destination::Rect(rect),
            source: None,
            tint: Color::WHITE,
            rotation: 0.0,
            origin: Vector2::zero(),
            scale: 1.0,
        }
    }

    /// Whole texture with its pivot at `position`, untinted.
    pub fn at(texture: impl Into<String>, position: Vector2) -> Self {
        Self {
            texture: texture.into(),
            destination: Destination::Position(position),
            source: None,
            tint: Color::WHITE,
            rotation: 0.0,
            origin: Vector2::zero(),
            scale: 1.0,
        }
    }

    pub fn with_source(mut self, source: Rectangle) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Tint with alpha replaced by `alpha` in [0, 1].
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.tint = with_alpha(self.tint, alpha);
        self
    }

    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// `color` with its alpha channel set from a [0, 1] fraction.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        ..color
    }
}

/// Commands for one frame, in draw order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: SmallVec<[DrawCommand; 16]>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First command drawing `texture`, if any.
    pub fn find(&self, texture: &str) -> Option<&DrawCommand> {
        self.commands.iter().find(|c| c.texture == texture)
    }
}
