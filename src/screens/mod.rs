//! Screens and the manager that switches between them.
//!
//! A screen is a self-contained interactive mode with its own load hook,
//! per-tick update and rendering. Screens never hold a reference to the
//! manager: a tick *returns* a [`Transition`] and the
//! [`ScreenManager`](manager::ScreenManager) acts on it.
//!
//! Submodules overview:
//! - [`manager`] – registry of screens and the single active one
//! - [`layout`] – button rectangles, hit testing and the cover background helper
//! - [`menu`] – intro, main menu and map selection
//! - [`gameplay`] – the driving screen hosting the vehicle simulation

pub mod gameplay;
pub mod layout;
pub mod manager;
pub mod menu;

use std::fmt;

use crate::resources::assets::{AssetError, AssetProvider};
use crate::resources::drawlist::DrawList;
use crate::resources::input::InputState;

/// Registry id of the menu screen.
pub const MAIN_MENU: &str = "MainMenu";
/// Registry id of the gameplay screen. Choosing a map replaces it.
pub const GAMEPLAY: &str = "Gameplay";

/// Builds a screen when a transition is consumed.
pub type ScreenFactory = Box<dyn FnOnce() -> Box<dyn Screen>>;

/// What a screen asks the manager to do after a tick.
pub enum Transition {
    /// Keep the current screen.
    Stay,
    /// Register the screen built by `factory` under `id` and activate it.
    SwitchTo { id: String, factory: ScreenFactory },
    /// Leave the game.
    Quit,
}

impl Transition {
    pub fn switch_to<F>(id: impl Into<String>, factory: F) -> Self
    where
        F: FnOnce() -> Box<dyn Screen> + 'static,
    {
        Transition::SwitchTo {
            id: id.into(),
            factory: Box::new(factory),
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Stay => f.write_str("Stay"),
            Transition::SwitchTo { id, .. } => f.debug_struct("SwitchTo").field("id", id).finish(),
            Transition::Quit => f.write_str("Quit"),
        }
    }
}

/// Failure inside a screen's load hook.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// An asset and its placeholder both failed.
    Asset(AssetError),
    /// Anything else the screen could not set up.
    Other(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Asset(e) => write!(f, "{}", e),
            LoadError::Other(reason) => f.write_str(reason),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Asset(e) => Some(e),
            LoadError::Other(_) => None,
        }
    }
}

impl From<AssetError> for LoadError {
    fn from(e: AssetError) -> Self {
        LoadError::Asset(e)
    }
}

/// One interactive mode of the game.
pub trait Screen {
    /// Load textures. Called on activation, before the first tick.
    fn on_load(&mut self, assets: &mut dyn AssetProvider) -> Result<(), LoadError>;

    /// Advance by `dt` seconds.
    fn on_tick(&mut self, dt: f32, input: &InputState) -> Transition;

    /// Emit this frame's draw commands.
    fn on_render(&self, surface: &mut DrawList);
}
