//! World-space position of an entity, in map texture pixels.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}

/// Marker for the entity the camera follows.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
