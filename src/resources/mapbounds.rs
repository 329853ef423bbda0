//! Extents of the loaded map, in texture pixels.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    /// Clamp `point` component-wise into `[0, width] x [0, height]`.
    pub fn clamp(&self, point: Vector2) -> Vector2 {
        Vector2 {
            x: point.x.clamp(0.0, self.width.max(0.0)),
            y: point.y.clamp(0.0, self.height.max(0.0)),
        }
    }
}
