//! Simulation clock for the gameplay world.

use bevy_ecs::prelude::Resource;

/// Elapsed and per-tick time, in seconds.
///
/// There is no fixed timestep: `delta` is whatever the host measured since the
/// previous frame, multiplied by `time_scale`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    /// Record a new frame delta.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.elapsed += scaled;
        self.delta = scaled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_elapsed() {
        let mut wt = WorldTime::default();
        wt.advance(0.5);
        wt.advance(0.25);
        assert_eq!(wt.delta, 0.25);
        assert_eq!(wt.elapsed, 0.75);
    }

    #[test]
    fn test_time_scale_applies() {
        let mut wt = WorldTime {
            time_scale: 2.0,
            ..Default::default()
        };
        wt.advance(0.5);
        assert_eq!(wt.delta, 1.0);
    }
}
