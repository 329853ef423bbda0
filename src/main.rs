//! Quad Sandbox main entry point.
//!
//! A top-down vehicle sandbox written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for the vehicle simulation inside the gameplay screen
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or the file given with `--config`) and open the window
//! 2. Register the menu screen, or jump straight into a map with `--map`
//! 3. Each frame:
//!    - sample keyboard and mouse into the input snapshot
//!    - tick the active screen, loading textures for newly activated screens
//!    - collect the screen's draw commands and replay them
//! 4. Leave when the window closes or a screen asks to quit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --map map1
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

use quadsandbox::game::Game;
use quadsandbox::resources::drawlist::DrawList;
use quadsandbox::resources::gameconfig::GameConfig;
use quadsandbox::resources::input::InputState;
use quadsandbox::resources::texturestore::{TextureLoader, TextureStore};
use quadsandbox::systems::input::update_input_state;
use quadsandbox::systems::render::render_draw_list;

/// Quad Sandbox: drive an ATV around a top-down map.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the menu and start on this map.
    #[arg(long, value_parser = ["map1", "map2"])]
    map: Option<String>,

    /// Window width override.
    #[arg(long)]
    width: Option<u32>,

    /// Window height override.
    #[arg(long)]
    height: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    let (width, height) = config.window_size();
    config.set_window_size(
        cli.width.filter(|w| *w > 0).unwrap_or(width),
        cli.height.filter(|h| *h > 0).unwrap_or(height),
    );

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the screens
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    let mut input = InputState::default();
    let mut draw_list = DrawList::new();
    let asset_root = config.asset_root.clone();

    let mut game = Game::new(&config);
    {
        let mut loader = TextureLoader::new(&mut rl, &thread, &mut textures, &asset_root);
        game.setup(&mut loader, cli.map.as_deref());
    }

    // --------------- Main loop ---------------
    while !rl.window_should_close() && game.is_running() {
        let dt = rl.get_frame_time();
        update_input_state(&rl, &mut input);
        {
            let mut loader = TextureLoader::new(&mut rl, &thread, &mut textures, &asset_root);
            game.update(dt, &input, &mut loader);
        }

        draw_list.clear();
        game.render(&mut draw_list);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_draw_list(&mut d, &draw_list, &textures);
    }
    info!("Bye");
}
