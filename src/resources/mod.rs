//! Resources shared by screens and systems.
//!
//! This module groups the long-lived data either injected into the gameplay
//! world or owned by the host loop: input state, timing, camera, map extents,
//! configuration and the texture/asset layer.
//!
//! Overview
//! - `assets` – asset provider trait and deterministic placeholders
//! - `camera2d` – camera that tracks the vehicle and clamps to the map
//! - `drawlist` – ordered draw commands emitted by screens
//! - `gameconfig` – window, tuning and asset paths read from `config.ini`
//! - `input` – per-tick keyboard and pointer snapshot
//! - `mapbounds` – extents of the loaded map
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod assets;
pub mod camera2d;
pub mod drawlist;
pub mod gameconfig;
pub mod input;
pub mod mapbounds;
pub mod texturestore;
pub mod worldtime;
