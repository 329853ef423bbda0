//! Acceleration-based input controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! writes the acceleration of entities with an
//! [`AccelerationControlled`](crate::components::inputcontrolled::AccelerationControlled)
//! component. WASD and the arrow keys are aliases.

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Recompute each controlled entity's acceleration from scratch.
///
/// With no direction held the acceleration is zero and friction in the
/// movement system handles deceleration.
pub fn input_acceleration_controller(
    mut query: Query<(&AccelerationControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (accel_controlled, mut rigidbody) in query.iter_mut() {
        rigidbody.acceleration = accel_controlled.acceleration(
            input_state.up(),
            input_state.down(),
            input_state.left(),
            input_state.right(),
        );
    }
}
