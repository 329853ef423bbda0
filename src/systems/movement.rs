//! Kinematic integration.
//!
//! Per entity and per tick: integrate acceleration, apply friction, clamp the
//! speed, integrate position and finally clamp the position into the map.
//! The velocity is left untouched by the position clamp, so a vehicle pushed
//! against an edge keeps its speed.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::mapbounds::MapBounds;
use crate::resources::worldtime::WorldTime;

pub fn movement_system(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
    bounds: Option<Res<MapBounds>>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        rigidbody.integrate_acceleration(dt);
        rigidbody.apply_friction();
        rigidbody.clamp_speed();

        let delta = rigidbody.velocity.scale_by(dt);
        position.pos = position.pos + delta;

        if let Some(bounds) = bounds.as_deref() {
            position.pos = bounds.clamp(position.pos);
        }
    }
}
