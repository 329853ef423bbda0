//! Game systems.
//!
//! This module groups the ECS systems that advance the vehicle simulation,
//! plus the host-side input sampling and draw list replay.
//!
//! Submodules overview
//! - [`camera`] – keep the camera centered on the vehicle within the map
//! - [`heading`] – derive the compass facing from the velocity
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputaccelerationcontroller`] – translate input state into acceleration
//! - [`movement`] – integrate velocity and position, clamp to the map
//! - [`render`] – replay a draw list using Raylib
//! - [`reset`] – put the vehicle back at the map center
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod heading;
pub mod input;
pub mod inputaccelerationcontroller;
pub mod movement;
pub mod render;
pub mod reset;
pub mod time;
