//! Camera tracking resource.
//!
//! [`CameraState`] holds the world-space top-left corner of the visible
//! region together with the zoom factor and the viewport size. The camera
//! system recomputes it every tick from the vehicle position so the vehicle
//! stays centered until the view reaches a map edge.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::mapbounds::MapBounds;

/// Default magnification of the gameplay view.
pub const DEFAULT_ZOOM: f32 = 2.5;

/// World-space view of the gameplay screen.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraState {
    /// Top-left corner of the visible region in world pixels.
    pub offset: Vector2,
    /// Screen pixels per world pixel. Always positive.
    pub zoom: f32,
    /// Size of the render target in screen pixels.
    pub viewport: Vector2,
}

impl CameraState {
    pub fn new(viewport: Vector2, zoom: f32) -> Self {
        Self {
            offset: Vector2::zero(),
            zoom,
            viewport,
        }
    }

    /// Center on `target`, keeping the view inside `bounds`.
    pub fn follow(&mut self, target: Vector2, bounds: &MapBounds) {
        self.offset = camera_top_left(target, self.viewport, self.zoom, bounds);
    }

    /// World-space extent covered by the viewport.
    pub fn visible_size(&self) -> Vector2 {
        Vector2 {
            x: self.viewport.x / self.zoom,
            y: self.viewport.y / self.zoom,
        }
    }

    /// Map texture region to sample for the current view.
    ///
    /// Components are truncated to whole pixels.
    pub fn source_rect(&self) -> Rectangle {
        let visible = self.visible_size();
        Rectangle {
            x: self.offset.x.trunc(),
            y: self.offset.y.trunc(),
            width: visible.x.trunc(),
            height: visible.y.trunc(),
        }
    }

    /// Convert a world position to screen pixels.
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        (world - self.offset).scale_by(self.zoom)
    }
}

/// Top-left corner of a view of `viewport / zoom` world pixels centered on
/// `target` and clamped into the map.
///
/// Each axis is clamped to `[0, bound - viewport / zoom]`. When the map is
/// smaller than the visible extent on an axis the range is empty and the axis
/// is pinned to 0.
pub fn camera_top_left(target: Vector2, viewport: Vector2, zoom: f32, bounds: &MapBounds) -> Vector2 {
    let half = Vector2 {
        x: viewport.x / (2.0 * zoom),
        y: viewport.y / (2.0 * zoom),
    };
    Vector2 {
        x: clamp_axis(target.x - half.x, bounds.width - viewport.x / zoom),
        y: clamp_axis(target.y - half.y, bounds.height - viewport.y / zoom),
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if max <= 0.0 { 0.0 } else { value.clamp(0.0, max) }
}
