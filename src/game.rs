//! Top-level game flow.
//!
//! [`Game`] wires the screens together: the menu is registered under
//! [`MAIN_MENU`] at startup and the menu itself requests gameplay screens
//! when a map is chosen. The host loop calls [`Game::update`] and
//! [`Game::render`] once per frame and stops when [`Game::is_running`]
//! turns false.

use log::{info, warn};

use crate::resources::assets::AssetProvider;
use crate::resources::drawlist::DrawList;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::screens::gameplay::{GameplayScreen, GameplaySettings, MapChoice};
use crate::screens::manager::{ScreenManager, TickOutcome};
use crate::screens::menu::MenuScreen;
use crate::screens::{GAMEPLAY, MAIN_MENU};

pub struct Game {
    screens: ScreenManager,
    settings: GameplaySettings,
    maps: [MapChoice; 2],
    running: bool,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_settings(config.gameplay_settings(), config.maps())
    }

    pub fn with_settings(settings: GameplaySettings, maps: [MapChoice; 2]) -> Self {
        Self {
            screens: ScreenManager::new(),
            settings,
            maps,
            running: true,
        }
    }

    /// Register the menu and activate the first screen.
    ///
    /// With `start_map` set to a known map id, the game skips the menu and
    /// starts driving right away. Unknown ids fall back to the menu.
    pub fn setup(&mut self, assets: &mut dyn AssetProvider, start_map: Option<&str>) {
        self.screens.register(
            MAIN_MENU,
            Box::new(MenuScreen::new(self.maps.clone(), self.settings)),
        );

        if let Some(id) = start_map {
            match self.maps.iter().find(|m| m.id == id) {
                Some(choice) => {
                    info!("Starting directly on map '{}'", id);
                    let screen = GameplayScreen::new(choice.clone(), self.settings);
                    self.screens.initialize(GAMEPLAY, Box::new(screen), assets);
                    return;
                }
                None => warn!("Unknown map '{}', starting at the menu", id),
            }
        }
        self.screens.activate(MAIN_MENU, assets);
    }

    /// Advance the active screen by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputState, assets: &mut dyn AssetProvider) {
        if !self.running {
            return;
        }
        if self.screens.tick(dt, input, assets) == TickOutcome::Quit {
            info!("Leaving the game");
            self.running = false;
        }
    }

    pub fn render(&self, surface: &mut DrawList) {
        self.screens.render(surface);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active_screen(&self) -> Option<&str> {
        self.screens.active_id()
    }
}
