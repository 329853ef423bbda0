//! ECS components for the vehicle simulation.
//!
//! Components hold the per-entity data the gameplay systems read and write.
//! A few plain-data helpers (timers, tweens) live here too because menu
//! screens drive them outside the ECS world.
//!
//! Submodules overview:
//! - [`heading`] – direction of travel and its 16-point compass facing
//! - [`inputcontrolled`] – keyboard-driven acceleration intent
//! - [`mapposition`] – world-space position and the camera target marker
//! - [`rigidbody`] – kinematic body with velocity, friction and a speed cap
//! - [`timer`] – countdown timer and the button press animation
//! - [`tween`] – eased interpolation of a single value

pub mod heading;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod timer;
pub mod tween;
