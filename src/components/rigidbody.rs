//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity and the per-tick
//! acceleration of an entity, together with the damping and speed limit used
//! by [`crate::systems::movement`]. There are no forces or masses: the
//! acceleration is written from scratch every tick by the input controller.
//!
//! Friction is a multiplicative factor applied once per tick, so the decay
//! rate depends on the frame rate.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity and acceleration.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `acceleration` - Acceleration for this tick in world units per second squared
/// - `friction` - Per-tick velocity multiplier, `0 < friction <= 1`
/// - `max_speed` - Hard limit on the velocity magnitude
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_physics(0.97, 350.0);
/// rb.acceleration = Vector2 { x: 100.0, y: 0.0 };
/// rb.integrate_acceleration(1.0 / 60.0);
/// rb.apply_friction();
/// rb.clamp_speed();
/// ```
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub acceleration: Vector2,
    pub friction: f32,
    pub max_speed: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::with_physics(1.0, f32::INFINITY)
    }
}

impl RigidBody {
    /// Create a body at rest with the given friction factor and speed limit.
    pub fn with_physics(friction: f32, max_speed: f32) -> Self {
        Self {
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            friction,
            max_speed,
        }
    }

    /// `velocity += acceleration * dt`.
    pub fn integrate_acceleration(&mut self, dt: f32) {
        self.velocity += self.acceleration.scale_by(dt);
    }

    /// Multiply the velocity by the friction factor.
    pub fn apply_friction(&mut self) {
        self.velocity = self.velocity.scale_by(self.friction);
    }

    /// Rescale the velocity to exactly `max_speed` when it is faster.
    ///
    /// Returns `true` if the velocity was clamped.
    pub fn clamp_speed(&mut self) -> bool {
        if self.velocity.length_sqr() > self.max_speed * self.max_speed {
            self.velocity = self.velocity.normalized() * self.max_speed;
            true
        } else {
            false
        }
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Zero both velocity and acceleration.
    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
        self.acceleration = Vector2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== CONSTRUCTOR TESTS ====================

    #[test]
    fn test_with_physics_starts_at_rest() {
        let rb = RigidBody::with_physics(0.97, 350.0);
        assert!(approx_eq(rb.speed(), 0.0));
        assert!(approx_eq(rb.acceleration.length(), 0.0));
        assert!(approx_eq(rb.friction, 0.97));
        assert!(approx_eq(rb.max_speed, 350.0));
    }

    #[test]
    fn test_default_has_no_damping() {
        let mut rb = RigidBody::default();
        rb.velocity = Vector2 { x: 10.0, y: 0.0 };
        rb.apply_friction();
        assert!(!rb.clamp_speed());
        assert!(approx_eq(rb.velocity.x, 10.0));
    }

    // ==================== INTEGRATION TESTS ====================

    #[test]
    fn test_integrate_acceleration() {
        let mut rb = RigidBody::with_physics(0.97, 350.0);
        rb.acceleration = Vector2 { x: 100.0, y: -50.0 };
        rb.integrate_acceleration(0.5);
        assert!(approx_eq(rb.velocity.x, 50.0));
        assert!(approx_eq(rb.velocity.y, -25.0));
    }

    #[test]
    fn test_apply_friction_once() {
        let mut rb = RigidBody::with_physics(0.97, 350.0);
        rb.velocity = Vector2 { x: 100.0, y: 0.0 };
        rb.apply_friction();
        assert!(approx_eq(rb.velocity.x, 97.0));
    }

    // ==================== CLAMP TESTS ====================

    #[test]
    fn test_clamp_speed_keeps_direction() {
        let mut rb = RigidBody::with_physics(0.97, 350.0);
        rb.velocity = Vector2 { x: 300.0, y: 400.0 };
        assert!(rb.clamp_speed());
        assert!(approx_eq(rb.speed(), 350.0));
        assert!(approx_eq(rb.velocity.x / rb.velocity.y, 0.75));
    }

    #[test]
    fn test_clamp_speed_below_limit_is_noop() {
        let mut rb = RigidBody::with_physics(0.97, 350.0);
        rb.velocity = Vector2 { x: 30.0, y: 40.0 };
        assert!(!rb.clamp_speed());
        assert!(approx_eq(rb.velocity.x, 30.0));
        assert!(approx_eq(rb.velocity.y, 40.0));
    }

    #[test]
    fn test_stop() {
        let mut rb = RigidBody::with_physics(0.97, 350.0);
        rb.velocity = Vector2 { x: 3.0, y: 4.0 };
        rb.acceleration = Vector2 { x: 1.0, y: 1.0 };
        rb.stop();
        assert!(approx_eq(rb.speed(), 0.0));
        assert!(approx_eq(rb.acceleration.length(), 0.0));
    }
}
