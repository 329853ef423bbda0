//! The menu screen: intro, main menu and map selection.
//!
//! One screen instance walks through three modes:
//!
//! - `Intro` fades and scales the title in over two seconds, then blinks a
//!   prompt. A click, Enter or Space during the blink moves on.
//! - `MainMenu` shows four buttons. "New game" opens the map selection on the
//!   same tick; the other buttons only animate. Escape quits.
//! - `MapSelection` shows two map buttons. A click starts a fresh gameplay
//!   screen for that map; Escape goes back to the main menu.
//!
//! A button press darkens the button for [`PRESS_ANIMATION_SECONDS`] and
//! blocks further clicks until it ends. The animation state is shared by both
//! button modes, so it keeps running across the switch to map selection.
//!
//! Clicks are completed clicks: the primary button must be released on the
//! tick being processed.

use std::f32::consts::PI;

use log::{debug, info, warn};
use raylib::prelude::{Color, Rectangle, Vector2};

use super::gameplay::{GameplayScreen, GameplaySettings, MapChoice};
use super::layout::{contains, draw_cover_background, map_button_rects, menu_button_rects};
use super::{GAMEPLAY, LoadError, Screen, Transition};
use crate::components::timer::{PRESS_ANIMATION_SECONDS, PressAnimation};
use crate::components::tween::{Easing, Tween};
use crate::resources::assets::{AssetProvider, Drawable, Placeholder, load_or_placeholder};
use crate::resources::drawlist::{DrawCommand, DrawList};
use crate::resources::input::InputState;

/// Length of the title fade-in in seconds.
pub const INTRO_SECONDS: f32 = 2.0;
/// Half period of the prompt blink in seconds.
pub const BLINK_PERIOD: f32 = 0.8;
/// Vertical gap between the top of the screen and the title.
const TITLE_TOP_MARGIN: i32 = 30;
const PROMPT_SCALE: f32 = 0.5;
const PRESSED_TINT: Color = Color::GRAY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMode {
    Intro,
    MainMenu,
    MapSelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuButton {
    NewGame,
    LoadGame,
    Support,
    Customize,
    Map1,
    Map2,
}

impl MenuButton {
    pub const MAIN: [MenuButton; 4] = [
        MenuButton::NewGame,
        MenuButton::LoadGame,
        MenuButton::Support,
        MenuButton::Customize,
    ];
    pub const MAPS: [MenuButton; 2] = [MenuButton::Map1, MenuButton::Map2];

    fn asset(self) -> (&'static str, &'static str, Color) {
        match self {
            MenuButton::NewGame => ("button_new_game", "textures/buttons/NewGame", Color::RED),
            MenuButton::LoadGame => ("button_load_game", "textures/buttons/LoadGame", Color::GREEN),
            MenuButton::Support => ("button_support", "textures/buttons/Support", Color::BLUE),
            MenuButton::Customize => ("button_customize", "textures/buttons/Customize", Color::YELLOW),
            MenuButton::Map1 => ("button_map1", "textures/buttons/Map1", Color::PURPLE),
            MenuButton::Map2 => ("button_map2", "textures/buttons/Map2", Color::ORANGE),
        }
    }
}

/// Title fade/scale-in followed by the blinking prompt.
#[derive(Clone, Debug)]
pub struct IntroAnimation {
    alpha: Tween,
    scale: Tween,
    complete: bool,
    blink_time: f32,
}

impl Default for IntroAnimation {
    fn default() -> Self {
        Self {
            alpha: Tween::new(0.0, 1.0, INTRO_SECONDS).with_easing(Easing::QuadInOut),
            scale: Tween::new(0.5, 1.0, INTRO_SECONDS).with_easing(Easing::QuadInOut),
            complete: false,
            blink_time: 0.0,
        }
    }
}

impl IntroAnimation {
    /// The blink starts on the same tick the title completes.
    pub fn advance(&mut self, dt: f32) {
        if !self.complete {
            self.alpha.advance(dt);
            self.scale.advance(dt);
            self.complete = self.alpha.finished();
        }
        if self.complete {
            self.blink_time += dt;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn title_alpha(&self) -> f32 {
        self.alpha.value()
    }

    pub fn title_scale(&self) -> f32 {
        self.scale.value()
    }

    /// Prompt opacity; zero until the title is complete.
    pub fn prompt_alpha(&self) -> f32 {
        if !self.complete {
            return 0.0;
        }
        0.5 + (self.blink_time * PI / BLINK_PERIOD).sin() * 0.5
    }
}

struct MenuTextures {
    background: Drawable,
    title: Drawable,
    prompt: Drawable,
    main_background: Drawable,
    buttons: [Drawable; 4],
    map_buttons: [Drawable; 2],
}

pub struct MenuScreen {
    mode: MenuMode,
    intro: IntroAnimation,
    press: PressAnimation<MenuButton>,
    viewport: Vector2,
    button_rects: [Rectangle; 4],
    map_rects: [Rectangle; 2],
    textures: Option<MenuTextures>,
    maps: [MapChoice; 2],
    settings: GameplaySettings,
}

impl MenuScreen {
    pub fn new(maps: [MapChoice; 2], settings: GameplaySettings) -> Self {
        let viewport = settings.viewport;
        Self {
            mode: MenuMode::Intro,
            intro: IntroAnimation::default(),
            press: PressAnimation::new(PRESS_ANIMATION_SECONDS),
            viewport,
            button_rects: menu_button_rects(viewport),
            map_rects: map_button_rects(viewport),
            textures: None,
            maps,
            settings,
        }
    }

    /// Screen rectangle of `button`.
    pub fn button_rect(&self, button: MenuButton) -> Rectangle {
        match button {
            MenuButton::NewGame => self.button_rects[0],
            MenuButton::LoadGame => self.button_rects[1],
            MenuButton::Support => self.button_rects[2],
            MenuButton::Customize => self.button_rects[3],
            MenuButton::Map1 => self.map_rects[0],
            MenuButton::Map2 => self.map_rects[1],
        }
    }

    fn hit(&self, buttons: &[MenuButton], point: Vector2) -> Option<MenuButton> {
        buttons
            .iter()
            .copied()
            .find(|b| contains(&self.button_rect(*b), point))
    }

    fn tick_intro(&mut self, dt: f32, input: &InputState) {
        self.intro.advance(dt);
        if self.intro.is_complete() && (input.pointer.clicked() || input.confirm_held()) {
            info!("Intro finished");
            self.mode = MenuMode::MainMenu;
        }
    }

    fn tick_main_menu(&mut self, dt: f32, input: &InputState) -> Transition {
        if input.action_back.just_pressed {
            return Transition::Quit;
        }
        self.press.advance(dt);
        if self.press.is_active() || !input.pointer.clicked() {
            return Transition::Stay;
        }
        if let Some(button) = self.hit(&MenuButton::MAIN, input.pointer.position) {
            self.press.start(button);
            debug!("{:?} clicked", button);
            if button == MenuButton::NewGame {
                info!("New game: showing map selection");
                self.mode = MenuMode::MapSelection;
            }
        }
        Transition::Stay
    }

    fn tick_map_selection(&mut self, dt: f32, input: &InputState) -> Transition {
        self.press.advance(dt);
        let mut transition = Transition::Stay;
        if !self.press.is_active() && input.pointer.clicked() {
            if let Some(button) = self.hit(&MenuButton::MAPS, input.pointer.position) {
                self.press.start(button);
                let index = if button == MenuButton::Map1 { 0 } else { 1 };
                transition = self.start_gameplay(index);
            }
        }
        if input.action_back.just_pressed {
            self.mode = MenuMode::MainMenu;
        }
        transition
    }

    fn start_gameplay(&self, index: usize) -> Transition {
        let choice = self.maps[index].clone();
        let settings = self.settings;
        info!("Map '{}' selected", choice.id);
        Transition::switch_to(GAMEPLAY, move || {
            Box::new(GameplayScreen::new(choice, settings)) as Box<dyn Screen>
        })
    }

    fn button_tint(&self, button: MenuButton) -> Color {
        if self.press.is_pressed(button) {
            PRESSED_TINT
        } else {
            Color::WHITE
        }
    }

    fn render_intro(&self, textures: &MenuTextures, surface: &mut DrawList) {
        draw_cover_background(surface, &textures.background, self.viewport);

        let title = &textures.title;
        let title_pos = Vector2 {
            x: (self.viewport.x as i32 / 2) as f32,
            y: (title.height as i32 / 2 + TITLE_TOP_MARGIN) as f32,
        };
        surface.push(
            DrawCommand::at(&title.key, title_pos)
                .with_origin(center_of(title))
                .with_scale(self.intro.title_scale())
                .with_alpha(self.intro.title_alpha()),
        );

        if self.intro.is_complete() {
            let prompt = &textures.prompt;
            let prompt_pos = Vector2 {
                x: (self.viewport.x as i32 / 2) as f32,
                y: (self.viewport.y as i32 - prompt.height as i32 / 4) as f32,
            };
            surface.push(
                DrawCommand::at(&prompt.key, prompt_pos)
                    .with_origin(center_of(prompt))
                    .with_scale(PROMPT_SCALE)
                    .with_alpha(self.intro.prompt_alpha()),
            );
        }
    }

    fn render_buttons(
        &self,
        buttons: &[MenuButton],
        drawables: &[Drawable],
        surface: &mut DrawList,
    ) {
        for (button, drawable) in buttons.iter().zip(drawables) {
            surface.push(
                DrawCommand::rect(&drawable.key, self.button_rect(*button))
                    .with_tint(self.button_tint(*button)),
            );
        }
    }
}

fn center_of(drawable: &Drawable) -> Vector2 {
    Vector2 {
        x: (drawable.width / 2) as f32,
        y: (drawable.height / 2) as f32,
    }
}

impl Screen for MenuScreen {
    fn on_load(&mut self, assets: &mut dyn AssetProvider) -> Result<(), LoadError> {
        let (w, h) = (self.viewport.x as u32, self.viewport.y as u32);
        let background = load_or_placeholder(
            assets,
            "menu_background",
            "textures/menu/Menu3",
            &Placeholder::solid(w, h, Color::DARKBLUE),
        )?;
        let title = load_or_placeholder(
            assets,
            "menu_title",
            "textures/menu/GameTitle",
            &Placeholder::solid(600, 150, Color::GOLD),
        )?;
        let prompt = load_or_placeholder(
            assets,
            "menu_prompt",
            "textures/menu/TapAny",
            &Placeholder::solid(400, 80, Color::WHITE),
        )?;
        let main_background = match assets.load_image("menu_main_background", "textures/menu/Menu2") {
            Ok(drawable) => drawable,
            Err(e) => {
                warn!("{}; reusing the intro background", e);
                background.clone()
            }
        };

        let mut load_button = |button: MenuButton| {
            let (key, path, color) = button.asset();
            load_or_placeholder(assets, key, path, &Placeholder::solid(200, 50, color))
        };
        let buttons = [
            load_button(MenuButton::NewGame)?,
            load_button(MenuButton::LoadGame)?,
            load_button(MenuButton::Support)?,
            load_button(MenuButton::Customize)?,
        ];
        let map_buttons = [load_button(MenuButton::Map1)?, load_button(MenuButton::Map2)?];

        self.textures = Some(MenuTextures {
            background,
            title,
            prompt,
            main_background,
            buttons,
            map_buttons,
        });
        Ok(())
    }

    fn on_tick(&mut self, dt: f32, input: &InputState) -> Transition {
        match self.mode {
            MenuMode::Intro => {
                self.tick_intro(dt, input);
                Transition::Stay
            }
            MenuMode::MainMenu => self.tick_main_menu(dt, input),
            MenuMode::MapSelection => self.tick_map_selection(dt, input),
        }
    }

    fn on_render(&self, surface: &mut DrawList) {
        let Some(textures) = &self.textures else {
            return;
        };
        match self.mode {
            MenuMode::Intro => self.render_intro(textures, surface),
            MenuMode::MainMenu => {
                draw_cover_background(surface, &textures.main_background, self.viewport);
                self.render_buttons(&MenuButton::MAIN, &textures.buttons, surface);
            }
            MenuMode::MapSelection => {
                draw_cover_background(surface, &textures.main_background, self.viewport);
                self.render_buttons(&MenuButton::MAPS, &textures.map_buttons, surface);
            }
        }
    }
}
