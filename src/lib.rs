//! Quad Sandbox library.
//!
//! This module exposes the vehicle components, resources, systems and screens
//! for use in integration tests and by the binary.

pub mod components;
pub mod game;
pub mod resources;
pub mod screens;
pub mod systems;
