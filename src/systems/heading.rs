//! Keeps each body's [`Heading`] aligned with its velocity.

use bevy_ecs::prelude::*;

use crate::components::heading::Heading;
use crate::components::rigidbody::RigidBody;

/// Refresh direction and compass facing for bodies moving faster than the
/// deadband; slower bodies keep their last facing.
pub fn heading_system(mut query: Query<(&RigidBody, &mut Heading)>) {
    for (rigidbody, mut heading) in query.iter_mut() {
        heading.follow_velocity(rigidbody.velocity);
    }
}
