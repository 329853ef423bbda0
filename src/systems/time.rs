//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, before the gameplay schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Write the frame delta into the world's `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds; `time_scale` is applied by
/// [`WorldTime::advance`].
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
