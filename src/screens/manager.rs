//! Screen registry and activation.
//!
//! The manager owns every registered screen by id and forwards tick and
//! render to the single active one. There is no stack: activating a screen
//! simply replaces the active id.
//!
//! Every registration gets a fresh serial number. The active slot remembers
//! the serial it activated. Re-registering the active id detaches the running
//! screen: it keeps ticking and rendering while the new one stays unloaded
//! until the id is activated again, which runs the new screen's load hook.

use log::{error, info, warn};
use rustc_hash::FxHashMap;

use super::{Screen, Transition};
use crate::resources::assets::AssetProvider;
use crate::resources::drawlist::DrawList;
use crate::resources::input::InputState;

/// Whether the game should keep running after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

struct Entry {
    screen: Box<dyn Screen>,
    serial: u64,
}

#[derive(Default)]
pub struct ScreenManager {
    screens: FxHashMap<String, Entry>,
    active: Option<(String, u64)>,
    /// Active screen displaced by a re-registration of its id.
    detached: Option<Box<dyn Screen>>,
    next_serial: u64,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `screen` under `id`, replacing any screen already registered
    /// there. Never runs a load hook.
    ///
    /// Replacing the active screen keeps the old instance running until the
    /// next [`activate`](Self::activate).
    pub fn register(&mut self, id: impl Into<String>, screen: Box<dyn Screen>) {
        let id = id.into();
        self.next_serial += 1;
        let entry = Entry {
            screen,
            serial: self.next_serial,
        };
        if let Some(old) = self.screens.insert(id.clone(), entry) {
            info!("Screen '{}' replaced", id);
            let was_active = self
                .active
                .as_ref()
                .is_some_and(|(active_id, serial)| *active_id == id && *serial == old.serial);
            if was_active {
                self.detached = Some(old.screen);
            }
        }
    }

    /// Register `screen` and make it active.
    pub fn initialize(
        &mut self,
        id: impl Into<String>,
        screen: Box<dyn Screen>,
        assets: &mut dyn AssetProvider,
    ) -> bool {
        let id = id.into();
        self.register(id.clone(), screen);
        self.activate(&id, assets)
    }

    /// Make `id` the active screen, running its load hook first.
    ///
    /// Unknown ids are logged and leave the manager untouched; the return
    /// value is `false` in that case. Activating the screen that is already
    /// active is a no-op. A failing load hook is logged and the screen is
    /// activated anyway.
    pub fn activate(&mut self, id: &str, assets: &mut dyn AssetProvider) -> bool {
        let Some(entry) = self.screens.get_mut(id) else {
            warn!("Cannot activate unknown screen '{}'", id);
            return false;
        };
        let already_active = self
            .active
            .as_ref()
            .is_some_and(|(active_id, serial)| active_id == id && *serial == entry.serial);
        if already_active {
            return true;
        }
        if let Err(e) = entry.screen.on_load(assets) {
            error!("Loading screen '{}' failed: {}", id, e);
        }
        self.active = Some((id.to_string(), entry.serial));
        self.detached = None;
        info!("Switched to screen '{}'", id);
        true
    }

    fn active_screen_mut(&mut self) -> Option<&mut Box<dyn Screen>> {
        if self.detached.is_some() {
            return self.detached.as_mut();
        }
        let (id, serial) = self.active.as_ref()?;
        self.screens
            .get_mut(id)
            .filter(|entry| entry.serial == *serial)
            .map(|entry| &mut entry.screen)
    }

    fn active_screen(&self) -> Option<&dyn Screen> {
        if let Some(screen) = &self.detached {
            return Some(screen.as_ref());
        }
        let (id, serial) = self.active.as_ref()?;
        self.screens
            .get(id)
            .filter(|entry| entry.serial == *serial)
            .map(|entry| entry.screen.as_ref())
    }

    /// Tick the active screen and act on the transition it returns.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputState,
        assets: &mut dyn AssetProvider,
    ) -> TickOutcome {
        let Some(screen) = self.active_screen_mut() else {
            return TickOutcome::Continue;
        };
        match screen.on_tick(dt, input) {
            Transition::Stay => TickOutcome::Continue,
            Transition::Quit => {
                info!("Quit requested by screen '{}'", self.active_id().unwrap_or_default());
                TickOutcome::Quit
            }
            Transition::SwitchTo { id, factory } => {
                self.register(id.clone(), factory());
                self.activate(&id, assets);
                TickOutcome::Continue
            }
        }
    }

    /// Render the active screen; nothing is emitted without one.
    pub fn render(&self, surface: &mut DrawList) {
        if let Some(screen) = self.active_screen() {
            screen.on_render(surface);
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::assets::MemoryAssets;
    use crate::resources::drawlist::DrawCommand;
    use crate::screens::LoadError;
    use raylib::prelude::Vector2;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: Log,
        fail_load: bool,
        next: Option<&'static str>,
        quit: bool,
    }

    impl Probe {
        fn boxed(name: &'static str, log: &Log) -> Box<dyn Screen> {
            Box::new(Probe {
                name,
                log: log.clone(),
                fail_load: false,
                next: None,
                quit: false,
            })
        }
    }

    impl Screen for Probe {
        fn on_load(&mut self, _assets: &mut dyn AssetProvider) -> Result<(), LoadError> {
            self.log.borrow_mut().push(format!("load {}", self.name));
            if self.fail_load {
                Err(LoadError::Other("broken".into()))
            } else {
                Ok(())
            }
        }

        fn on_tick(&mut self, _dt: f32, _input: &InputState) -> Transition {
            self.log.borrow_mut().push(format!("tick {}", self.name));
            if self.quit {
                return Transition::Quit;
            }
            match self.next.take() {
                Some(next) => {
                    let log = self.log.clone();
                    Transition::switch_to(next, move || Probe::boxed(next, &log))
                }
                None => Transition::Stay,
            }
        }

        fn on_render(&self, surface: &mut DrawList) {
            surface.push(DrawCommand::at(self.name, Vector2::zero()));
        }
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_tick_and_render_without_active_are_noops() {
        let mut manager = ScreenManager::new();
        let mut surface = DrawList::new();
        assert_eq!(
            manager.tick(0.1, &InputState::default(), &mut MemoryAssets::new()),
            TickOutcome::Continue
        );
        manager.render(&mut surface);
        assert!(surface.is_empty());
        assert!(manager.active_id().is_none());
    }

    #[test]
    fn test_activate_unknown_keeps_active() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.initialize("A", Probe::boxed("A", &log), &mut MemoryAssets::new());
        assert!(!manager.activate("nonexistent", &mut MemoryAssets::new()));
        assert_eq!(manager.active_id(), Some("A"));
    }

    #[test]
    fn test_double_register_replaces() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.register("A", Probe::boxed("first", &log));
        manager.register("A", Probe::boxed("second", &log));
        assert_eq!(manager.screens.len(), 1);
        manager.activate("A", &mut MemoryAssets::new());
        assert_eq!(entries(&log), vec!["load second"]);
    }

    #[test]
    fn test_activate_active_is_noop() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.initialize("A", Probe::boxed("A", &log), &mut MemoryAssets::new());
        manager.activate("A", &mut MemoryAssets::new());
        assert_eq!(entries(&log), vec!["load A"]);
    }

    #[test]
    fn test_load_failure_still_activates() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.register(
            "A",
            Box::new(Probe {
                name: "A",
                log: log.clone(),
                fail_load: true,
                next: None,
                quit: false,
            }),
        );
        assert!(manager.activate("A", &mut MemoryAssets::new()));
        assert_eq!(manager.active_id(), Some("A"));
    }

    #[test]
    fn test_replacing_active_screen_keeps_old_running_until_activated() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.initialize("A", Probe::boxed("old", &log), &mut MemoryAssets::new());
        manager.register("A", Probe::boxed("new", &log));
        assert_eq!(manager.active_id(), Some("A"));
        assert_eq!(manager.screens.len(), 1);

        let mut surface = DrawList::new();
        manager.tick(0.1, &InputState::default(), &mut MemoryAssets::new());
        manager.render(&mut surface);
        assert!(surface.find("old").is_some());
        assert!(surface.find("new").is_none());
        assert_eq!(entries(&log), vec!["load old", "tick old"]);

        manager.activate("A", &mut MemoryAssets::new());
        surface.clear();
        manager.tick(0.1, &InputState::default(), &mut MemoryAssets::new());
        manager.render(&mut surface);
        assert!(surface.find("new").is_some());
        assert!(surface.find("old").is_none());
        assert_eq!(
            entries(&log),
            vec!["load old", "tick old", "load new", "tick new"]
        );
    }

    #[test]
    fn test_activating_other_screen_drops_detached() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.initialize("A", Probe::boxed("old", &log), &mut MemoryAssets::new());
        manager.register("A", Probe::boxed("new", &log));
        manager.register("B", Probe::boxed("B", &log));
        manager.activate("B", &mut MemoryAssets::new());

        let mut surface = DrawList::new();
        manager.render(&mut surface);
        assert_eq!(surface.len(), 1);
        assert!(surface.find("B").is_some());
    }

    #[test]
    fn test_switch_transition_registers_and_activates() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.initialize(
            "A",
            Box::new(Probe {
                name: "A",
                log: log.clone(),
                fail_load: false,
                next: Some("B"),
                quit: false,
            }),
            &mut MemoryAssets::new(),
        );
        manager.tick(0.1, &InputState::default(), &mut MemoryAssets::new());
        assert_eq!(manager.active_id(), Some("B"));
        assert!(manager.screens.contains_key("A"));
        manager.tick(0.1, &InputState::default(), &mut MemoryAssets::new());
        assert_eq!(entries(&log), vec!["load A", "tick A", "load B", "tick B"]);
    }

    #[test]
    fn test_quit_transition() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.initialize(
            "A",
            Box::new(Probe {
                name: "A",
                log: log.clone(),
                fail_load: false,
                next: None,
                quit: true,
            }),
            &mut MemoryAssets::new(),
        );
        assert_eq!(
            manager.tick(0.1, &InputState::default(), &mut MemoryAssets::new()),
            TickOutcome::Quit
        );
    }
}
