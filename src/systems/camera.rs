//! Camera follow system.

use bevy_ecs::prelude::*;

use crate::components::mapposition::{CameraTarget, MapPosition};
use crate::resources::camera2d::CameraState;
use crate::resources::mapbounds::MapBounds;

/// Center the camera on the [`CameraTarget`] entity, clamped to the map.
///
/// With several targets the last one queried wins; the gameplay world only
/// ever has one.
pub fn camera_follow_system(
    query: Query<&MapPosition, With<CameraTarget>>,
    mut camera: ResMut<CameraState>,
    bounds: Res<MapBounds>,
) {
    for position in query.iter() {
        camera.follow(position.pos, &bounds);
    }
}
