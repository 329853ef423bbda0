//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup; any missing or invalid value keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1600
//! height = 900
//! target_fps = 60
//! title = Quad Sandbox
//!
//! [camera]
//! zoom = 2.5
//!
//! [vehicle]
//! acceleration = 100
//! max_speed = 350
//! friction = 0.97
//! sprite_scale = 0.15
//!
//! [assets]
//! root = ./assets
//!
//! [maps]
//! map1 = textures/maps/map1
//! map2 = textures/maps/map2
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use raylib::prelude::Vector2;
use std::path::PathBuf;

use crate::resources::camera2d::DEFAULT_ZOOM;
use crate::screens::gameplay::{GameplaySettings, MapChoice};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1600;
const DEFAULT_WINDOW_HEIGHT: u32 = 900;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Quad Sandbox";
const DEFAULT_ACCELERATION: f32 = 100.0;
const DEFAULT_MAX_SPEED: f32 = 350.0;
const DEFAULT_FRICTION: f32 = 0.97;
const DEFAULT_SPRITE_SCALE: f32 = 0.15;
const DEFAULT_ASSET_ROOT: &str = "./assets";
const DEFAULT_MAP1: &str = "textures/maps/map1";
const DEFAULT_MAP2: &str = "textures/maps/map2";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, gameplay tuning and asset locations.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels. Also the logical viewport width.
    pub window_width: u32,
    /// Window height in pixels. Also the logical viewport height.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Gameplay camera zoom.
    pub zoom: f32,
    /// Vehicle acceleration per held direction.
    pub acceleration: f32,
    /// Vehicle speed limit.
    pub max_speed: f32,
    /// Per-tick velocity multiplier.
    pub friction: f32,
    /// Scale applied to the vehicle sprite.
    pub sprite_scale: f32,
    /// Directory the texture loader searches.
    pub asset_root: PathBuf,
    /// Logical path of the first map texture, without extension.
    pub map1: String,
    /// Logical path of the second map texture, without extension.
    pub map2: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            zoom: DEFAULT_ZOOM,
            acceleration: DEFAULT_ACCELERATION,
            max_speed: DEFAULT_MAX_SPEED,
            friction: DEFAULT_FRICTION,
            sprite_scale: DEFAULT_SPRITE_SCALE,
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            map1: DEFAULT_MAP1.to_string(),
            map2: DEFAULT_MAP2.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    #[cfg(test)]
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = positive_uint(config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = positive_uint(config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = positive_uint(config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [camera] section
        if let Some(zoom) = positive_float(config, "camera", "zoom") {
            self.zoom = zoom;
        }

        // [vehicle] section
        if let Some(acceleration) = positive_float(config, "vehicle", "acceleration") {
            self.acceleration = acceleration;
        }
        if let Some(max_speed) = positive_float(config, "vehicle", "max_speed") {
            self.max_speed = max_speed;
        }
        if let Some(friction) = positive_float(config, "vehicle", "friction") {
            if friction <= 1.0 {
                self.friction = friction;
            } else {
                warn!("Ignoring [vehicle] friction = {}: must be at most 1", friction);
            }
        }
        if let Some(scale) = positive_float(config, "vehicle", "sprite_scale") {
            self.sprite_scale = scale;
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.asset_root = PathBuf::from(root);
        }

        // [maps] section
        if let Some(map1) = config.get("maps", "map1") {
            self.map1 = map1;
        }
        if let Some(map2) = config.get("maps", "map2") {
            self.map2 = map2;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, zoom={}, accel={}, max_speed={}, friction={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.zoom,
            self.acceleration,
            self.max_speed,
            self.friction
        );
    }

    /// Set window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Window size as the logical viewport.
    pub fn viewport(&self) -> Vector2 {
        Vector2 {
            x: self.window_width as f32,
            y: self.window_height as f32,
        }
    }

    /// Tuning handed to every gameplay screen.
    pub fn gameplay_settings(&self) -> GameplaySettings {
        GameplaySettings {
            viewport: self.viewport(),
            zoom: self.zoom,
            acceleration: self.acceleration,
            max_speed: self.max_speed,
            friction: self.friction,
            sprite_scale: self.sprite_scale,
        }
    }

    /// The two selectable maps, in button order.
    pub fn maps(&self) -> [MapChoice; 2] {
        [
            MapChoice::new("map1", &self.map1),
            MapChoice::new("map2", &self.map2),
        ]
    }
}

fn positive_uint(config: &Ini, section: &str, key: &str) -> Option<u32> {
    match config.getuint(section, key) {
        Ok(Some(value)) if value > 0 && value <= u32::MAX as u64 => Some(value as u32),
        Ok(Some(value)) => {
            warn!("Ignoring [{}] {} = {}: out of range", section, key, value);
            None
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}

fn positive_float(config: &Ini, section: &str, key: &str) -> Option<f32> {
    match config.getfloat(section, key) {
        Ok(Some(value)) if value > 0.0 && value.is_finite() => Some(value as f32),
        Ok(Some(value)) => {
            warn!("Ignoring [{}] {} = {}: must be positive", section, key, value);
            None
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1600, 900));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.zoom, 2.5);
        assert_eq!(config.acceleration, 100.0);
        assert_eq!(config.max_speed, 350.0);
        assert_eq!(config.friction, 0.97);
        assert_eq!(config.sprite_scale, 0.15);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_with_path() {
        let config = GameConfig::with_path("/tmp/other.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/other.ini"));
        assert_eq!(config.window_width, 1600);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut config = GameConfig::new();
        let text = "[window]\nwidth = 1280\ntitle = Test\n[camera]\nzoom = 3.0\n[maps]\nmap2 = maps/desert\n";
        assert!(config.load_from_str(text).is_ok());
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 900);
        assert_eq!(config.title, "Test");
        assert_eq!(config.zoom, 3.0);
        assert_eq!(config.map1, "textures/maps/map1");
        assert_eq!(config.map2, "maps/desert");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = GameConfig::new();
        let text = "[camera]\nzoom = -1\n[vehicle]\nfriction = 1.5\nmax_speed = fast\n[window]\nwidth = 0\n";
        assert!(config.load_from_str(text).is_ok());
        assert_eq!(config.zoom, 2.5);
        assert_eq!(config.friction, 0.97);
        assert_eq!(config.max_speed, 350.0);
        assert_eq!(config.window_width, 1600);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut config = GameConfig::with_path("/nonexistent/quadsandbox/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1600);
    }

    #[test]
    fn test_gameplay_settings_and_maps() {
        let config = GameConfig::new();
        let settings = config.gameplay_settings();
        assert_eq!(settings.viewport.x, 1600.0);
        assert_eq!(settings.viewport.y, 900.0);
        assert_eq!(settings.zoom, 2.5);
        let maps = config.maps();
        assert_eq!(maps[0].id, "map1");
        assert_eq!(maps[1].path, "textures/maps/map2");
    }
}
