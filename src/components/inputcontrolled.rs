//! Input-controlled acceleration component.
//!
//! [`AccelerationControlled`] describes how strongly an entity accelerates
//! along each axis when a direction is held. The system in
//! [`crate::systems::inputaccelerationcontroller`] writes the result into the
//! entity's [`RigidBody`](super::rigidbody::RigidBody) every tick.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Acceleration applied while directional input is held.
#[derive(Component, Clone, Copy, Debug)]
pub struct AccelerationControlled {
    /// Acceleration magnitude per held direction, in units per second squared.
    pub rate: f32,
}

impl AccelerationControlled {
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }

    /// Acceleration for the held directions.
    ///
    /// Each direction adds `rate` along its axis and opposing directions
    /// cancel. Diagonals are not normalized, so holding two perpendicular
    /// directions yields a magnitude of `rate * sqrt(2)`.
    pub fn acceleration(&self, up: bool, down: bool, left: bool, right: bool) -> Vector2 {
        let mut acceleration = Vector2::zero();
        if up {
            acceleration.y -= self.rate;
        }
        if down {
            acceleration.y += self.rate;
        }
        if left {
            acceleration.x -= self.rate;
        }
        if right {
            acceleration.x += self.rate;
        }
        acceleration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_is_zero() {
        let ctrl = AccelerationControlled::new(100.0);
        let a = ctrl.acceleration(false, false, false, false);
        assert_eq!(a.x, 0.0);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn test_up_is_negative_y() {
        let ctrl = AccelerationControlled::new(100.0);
        let a = ctrl.acceleration(true, false, false, false);
        assert_eq!(a.y, -100.0);
        assert_eq!(a.x, 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let ctrl = AccelerationControlled::new(100.0);
        let a = ctrl.acceleration(true, true, true, true);
        assert_eq!(a.x, 0.0);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let ctrl = AccelerationControlled::new(100.0);
        let a = ctrl.acceleration(false, true, false, true);
        assert_eq!(a.x, 100.0);
        assert_eq!(a.y, 100.0);
    }
}
