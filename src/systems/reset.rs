//! Vehicle reset.
//!
//! Pressing the reset key puts the vehicle back at the center of the map at
//! rest, facing north. Resetting twice in a row has the same result as
//! resetting once.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::heading::Heading;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;
use crate::resources::mapbounds::MapBounds;

/// Move a body to the map center and stop it.
pub fn reset_vehicle(
    position: &mut MapPosition,
    rigidbody: &mut RigidBody,
    heading: &mut Heading,
    bounds: &MapBounds,
) {
    position.pos = bounds.center();
    rigidbody.stop();
    heading.reset();
}

/// Reset every controlled body on the tick the reset key goes down.
pub fn vehicle_reset_system(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &mut Heading)>,
    input: Res<InputState>,
    bounds: Res<MapBounds>,
) {
    if !input.action_reset.just_pressed {
        return;
    }
    for (mut position, mut rigidbody, mut heading) in query.iter_mut() {
        reset_vehicle(&mut position, &mut rigidbody, &mut heading, &bounds);
        info!(
            "Vehicle reset to ({:.1}, {:.1})",
            position.pos.x, position.pos.y
        );
    }
}
