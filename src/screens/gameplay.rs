//! The driving screen.
//!
//! Each gameplay screen owns a small `bevy_ecs` world holding one vehicle and
//! the resources the vehicle systems need. A tick copies the input snapshot
//! into the world, advances [`WorldTime`] and runs a chained schedule:
//!
//! 1. reset (edge-triggered on the reset key)
//! 2. acceleration from held directions
//! 3. integration with friction, speed clamp and map clamp
//! 4. heading and compass facing
//! 5. camera follow
//!
//! Rendering reads the world back and emits the map, the vehicle sprite for
//! the current facing and the speedometer.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Color, Rectangle, Vector2};
use rustc_hash::FxHashMap;

use super::{LoadError, Screen, Transition};
use crate::components::heading::{CompassLabel, Heading};
use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::mapposition::{CameraTarget, MapPosition};
use crate::components::rigidbody::RigidBody;
use crate::resources::assets::{AssetProvider, Drawable, Placeholder, load_or_placeholder};
use crate::resources::camera2d::CameraState;
use crate::resources::drawlist::{DrawCommand, DrawList};
use crate::resources::input::InputState;
use crate::resources::mapbounds::MapBounds;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_follow_system;
use crate::systems::heading::heading_system;
use crate::systems::inputaccelerationcontroller::input_acceleration_controller;
use crate::systems::movement::movement_system;
use crate::systems::reset::vehicle_reset_system;
use crate::systems::time::update_world_time;

/// Side of the square map used when the map texture is missing.
pub const PLACEHOLDER_MAP_SIZE: u32 = 1000;
/// Side of the generated vehicle sprites.
pub const PLACEHOLDER_SPRITE_SIZE: u32 = 50;

/// Speedometer frame in screen pixels.
pub const SPEEDOMETER: Rectangle = Rectangle {
    x: 10.0,
    y: 10.0,
    width: 150.0,
    height: 20.0,
};

const MAP_KEY: &str = "map";
const HUD_BACKGROUND_KEY: &str = "hud_speed_background";
const HUD_FILL_KEY: &str = "hud_speed_fill";

/// A selectable map: an id for logs and the logical texture path.
#[derive(Clone, Debug, PartialEq)]
pub struct MapChoice {
    pub id: String,
    pub path: String,
}

impl MapChoice {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// Tuning shared by every gameplay screen.
#[derive(Clone, Copy, Debug)]
pub struct GameplaySettings {
    pub viewport: Vector2,
    pub zoom: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub friction: f32,
    pub sprite_scale: f32,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            viewport: Vector2 { x: 1600.0, y: 900.0 },
            zoom: 2.5,
            acceleration: 100.0,
            max_speed: 350.0,
            friction: 0.97,
            sprite_scale: 0.15,
        }
    }
}

/// Texture key of the vehicle sprite for `facing`.
pub fn sprite_key(facing: CompassLabel) -> String {
    format!("quad_{}", facing.asset_key())
}

fn sprite_path(facing: CompassLabel) -> String {
    format!("textures/quad/Quad_{}", facing.asset_key())
}

/// The vehicle systems in execution order.
pub fn vehicle_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            vehicle_reset_system,
            input_acceleration_controller,
            movement_system,
            heading_system,
            camera_follow_system,
        )
            .chain(),
    );
    schedule
}

/// World with the resources the vehicle schedule reads.
pub fn vehicle_world(settings: &GameplaySettings, bounds: MapBounds) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(bounds);
    world.insert_resource(CameraState::new(settings.viewport, settings.zoom));
    world
}

/// Spawn the controllable vehicle at `position`, at rest and facing north.
pub fn spawn_vehicle(world: &mut World, settings: &GameplaySettings, position: Vector2) -> Entity {
    world
        .spawn((
            MapPosition::from_vec(position),
            RigidBody::with_physics(settings.friction, settings.max_speed),
            AccelerationControlled::new(settings.acceleration),
            Heading::default(),
            CameraTarget,
        ))
        .id()
}

/// Read-only view of the vehicle after the last tick.
#[derive(Clone, Copy, Debug)]
pub struct VehicleSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    pub facing: CompassLabel,
}

impl VehicleSnapshot {
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

struct GameplayTextures {
    map: Drawable,
    sprites: FxHashMap<CompassLabel, Drawable>,
}

pub struct GameplayScreen {
    map: MapChoice,
    settings: GameplaySettings,
    world: World,
    schedule: Schedule,
    vehicle: Entity,
    textures: Option<GameplayTextures>,
}

impl GameplayScreen {
    /// The vehicle starts at the viewport center in world pixels.
    pub fn new(map: MapChoice, settings: GameplaySettings) -> Self {
        let placeholder_side = PLACEHOLDER_MAP_SIZE as f32;
        let mut world = vehicle_world(&settings, MapBounds::new(placeholder_side, placeholder_side));
        let start = Vector2 {
            x: (settings.viewport.x as i32 / 2) as f32,
            y: (settings.viewport.y as i32 / 2) as f32,
        };
        let vehicle = spawn_vehicle(&mut world, &settings, start);
        Self {
            map,
            settings,
            world,
            schedule: vehicle_schedule(),
            vehicle,
            textures: None,
        }
    }

    pub fn camera(&self) -> CameraState {
        *self.world.resource::<CameraState>()
    }

    pub fn vehicle(&self) -> VehicleSnapshot {
        let entity = self.world.entity(self.vehicle);
        let position = entity.get::<MapPosition>().map(|p| p.pos).unwrap_or_default();
        let (velocity, acceleration) = entity
            .get::<RigidBody>()
            .map(|rb| (rb.velocity, rb.acceleration))
            .unwrap_or_default();
        let facing = entity.get::<Heading>().map(|h| h.facing).unwrap_or_default();
        VehicleSnapshot {
            position,
            velocity,
            acceleration,
            facing,
        }
    }

    fn render_speedometer(&self, speed: f32, surface: &mut DrawList) {
        surface.push(DrawCommand::rect(HUD_BACKGROUND_KEY, SPEEDOMETER));
        let ratio = if self.settings.max_speed > 0.0 {
            (speed / self.settings.max_speed).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let fill = Rectangle {
            width: (SPEEDOMETER.width * ratio).trunc(),
            ..SPEEDOMETER
        };
        surface.push(DrawCommand::rect(HUD_FILL_KEY, fill));
    }
}

impl Screen for GameplayScreen {
    fn on_load(&mut self, assets: &mut dyn AssetProvider) -> Result<(), LoadError> {
        let map = load_or_placeholder(
            assets,
            MAP_KEY,
            &self.map.path,
            &Placeholder::solid(PLACEHOLDER_MAP_SIZE, PLACEHOLDER_MAP_SIZE, Color::GREEN),
        )?;
        let bounds = MapBounds::new(map.width as f32, map.height as f32);
        self.world.insert_resource(bounds);
        info!(
            "Map '{}' loaded: {}x{}",
            self.map.id, map.width, map.height
        );

        let mut sprites = FxHashMap::default();
        for facing in CompassLabel::ALL {
            let placeholder =
                Placeholder::compass(PLACEHOLDER_SPRITE_SIZE, Color::RED, facing.asset_key());
            let drawable =
                load_or_placeholder(assets, &sprite_key(facing), &sprite_path(facing), &placeholder)?;
            sprites.insert(facing, drawable);
        }

        assets.create_placeholder(HUD_BACKGROUND_KEY, &Placeholder::solid(1, 1, Color::DARKGRAY))?;
        assets.create_placeholder(HUD_FILL_KEY, &Placeholder::solid(1, 1, Color::GREEN))?;

        self.textures = Some(GameplayTextures { map, sprites });
        Ok(())
    }

    fn on_tick(&mut self, dt: f32, input: &InputState) -> Transition {
        if input.action_back.just_pressed {
            return Transition::Quit;
        }
        *self.world.resource_mut::<InputState>() = input.clone();
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);

        // Only the report key logs the speed; steering keys stay silent
        if input.action_speed_report.just_pressed {
            info!("Current speed: {:.1} pixels/sec", self.vehicle().speed());
        }
        Transition::Stay
    }

    fn on_render(&self, surface: &mut DrawList) {
        let camera = self.camera();
        let vehicle = self.vehicle();

        if let Some(textures) = &self.textures {
            surface.push(
                DrawCommand::rect(
                    &textures.map.key,
                    Rectangle::new(0.0, 0.0, camera.viewport.x, camera.viewport.y),
                )
                .with_source(camera.source_rect()),
            );

            if let Some(sprite) = textures.sprites.get(&vehicle.facing) {
                let origin = Vector2 {
                    x: (sprite.width / 2) as f32,
                    y: (sprite.height / 2) as f32,
                };
                surface.push(
                    DrawCommand::at(&sprite.key, camera.world_to_screen(vehicle.position))
                        .with_origin(origin)
                        .with_scale(self.settings.sprite_scale),
                );
            }
        }

        self.render_speedometer(vehicle.speed(), surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::assets::{MemoryAssets, Pattern};
    use crate::resources::drawlist::Destination;
    use raylib::prelude::KeyboardKey;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn screen() -> GameplayScreen {
        GameplayScreen::new(
            MapChoice::new("map1", "textures/maps/map1"),
            GameplaySettings::default(),
        )
    }

    fn held(keys: &[KeyboardKey]) -> InputState {
        let mut input = InputState::default();
        input.sample(|k| keys.contains(&k), Vector2::zero(), false);
        input
    }

    #[test]
    fn test_vehicle_starts_at_viewport_center_facing_north() {
        let screen = screen();
        let vehicle = screen.vehicle();
        assert_eq!(vehicle.position.x, 800.0);
        assert_eq!(vehicle.position.y, 450.0);
        assert_eq!(vehicle.facing, CompassLabel::N);
        assert_eq!(vehicle.speed(), 0.0);
    }

    #[test]
    fn test_missing_map_uses_placeholder_bounds() {
        let mut screen = screen();
        let mut assets = MemoryAssets::new();
        screen.on_load(&mut assets).unwrap();
        assert_eq!(*screen.world.resource::<MapBounds>(), MapBounds::new(1000.0, 1000.0));
        assert_eq!(
            assets.placeholder("map"),
            Some(&Placeholder::solid(1000, 1000, Color::GREEN))
        );
    }

    #[test]
    fn test_loaded_map_sets_bounds() {
        let mut screen = screen();
        let mut assets = MemoryAssets::new().with_file("textures/maps/map1", 2000, 1500);
        screen.on_load(&mut assets).unwrap();
        assert_eq!(*screen.world.resource::<MapBounds>(), MapBounds::new(2000.0, 1500.0));
    }

    #[test]
    fn test_all_sixteen_sprites_are_requested() {
        let mut screen = screen();
        let mut assets = MemoryAssets::new().with_file("textures/quad/Quad_NEE", 512, 512);
        screen.on_load(&mut assets).unwrap();
        assert_eq!(assets.loaded, vec!["quad_NEE".to_string()]);
        let generated = assets
            .placeholders
            .iter()
            .filter(|(key, _)| key.starts_with("quad_"))
            .count();
        assert_eq!(generated, 15);
        let sww = assets.placeholder("quad_SWW").unwrap();
        assert_eq!(
            sww.pattern,
            Pattern::Compass {
                color: Color::RED,
                letters: "SWW"
            }
        );
        assert_eq!(sww.width, PLACEHOLDER_SPRITE_SIZE);
    }

    #[test]
    fn test_holding_right_accelerates_east() {
        let mut screen = screen();
        screen.on_load(&mut MemoryAssets::new()).unwrap();
        let input = held(&[KeyboardKey::KEY_RIGHT]);
        for _ in 0..30 {
            assert!(matches!(screen.on_tick(1.0 / 60.0, &input), Transition::Stay));
        }
        let vehicle = screen.vehicle();
        assert!(vehicle.velocity.x > 0.0);
        assert!(approx_eq(vehicle.velocity.y, 0.0));
        assert!(vehicle.position.x > 800.0);
        assert_eq!(vehicle.facing, CompassLabel::E);
        assert!(approx_eq(vehicle.acceleration.x, 100.0));
    }

    #[test]
    fn test_speed_report_key_does_not_steer() {
        let mut screen = screen();
        screen.on_load(&mut MemoryAssets::new()).unwrap();
        let mut input = InputState::default();
        for _ in 0..10 {
            input.sample(|k| k == KeyboardKey::KEY_LEFT_SHIFT, Vector2::zero(), false);
            assert!(matches!(screen.on_tick(1.0 / 60.0, &input), Transition::Stay));
        }
        let vehicle = screen.vehicle();
        assert_eq!(vehicle.speed(), 0.0);
        assert_eq!(vehicle.position.x, 800.0);
        assert_eq!(vehicle.facing, CompassLabel::N);
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = screen();
        let input = held(&[KeyboardKey::KEY_ESCAPE]);
        assert!(matches!(screen.on_tick(0.016, &input), Transition::Quit));
    }

    #[test]
    fn test_reset_key_recenters_on_map() {
        let mut screen = screen();
        screen.on_load(&mut MemoryAssets::new()).unwrap();
        let input = held(&[KeyboardKey::KEY_D, KeyboardKey::KEY_S]);
        for _ in 0..10 {
            screen.on_tick(0.1, &input);
        }
        let input = held(&[KeyboardKey::KEY_R]);
        screen.on_tick(0.1, &input);
        let vehicle = screen.vehicle();
        assert_eq!(vehicle.position.x, 500.0);
        assert_eq!(vehicle.position.y, 500.0);
        assert_eq!(vehicle.speed(), 0.0);
        assert_eq!(vehicle.facing, CompassLabel::N);
    }

    #[test]
    fn test_render_order_and_geometry() {
        let mut screen = screen();
        screen.on_load(&mut MemoryAssets::new()).unwrap();
        screen.on_tick(0.016, &InputState::default());

        let mut surface = DrawList::new();
        screen.on_render(&mut surface);
        let keys: Vec<&str> = surface.iter().map(|c| c.texture.as_str()).collect();
        assert_eq!(keys, vec!["map", "quad_N", HUD_BACKGROUND_KEY, HUD_FILL_KEY]);

        // vehicle at (800, 450) on a 1000x1000 map: camera clamps to (360, 270)
        let map = surface.find("map").unwrap();
        let src = map.source.unwrap();
        assert!(approx_eq(src.x, 360.0));
        assert!(approx_eq(src.y, 270.0));
        assert!(approx_eq(src.width, 640.0));
        assert!(approx_eq(src.height, 360.0));

        let sprite = surface.find("quad_N").unwrap();
        match sprite.destination {
            Destination::Position(p) => {
                assert!(approx_eq(p.x, 1100.0));
                assert!(approx_eq(p.y, 450.0));
            }
            Destination::Rect(_) => panic!("vehicle is drawn at a position"),
        }
        assert!(approx_eq(sprite.origin.x, 25.0));
        assert!(approx_eq(sprite.scale, 0.15));
    }

    #[test]
    fn test_speedometer_fill_tracks_speed() {
        let screen = screen();
        let mut surface = DrawList::new();
        screen.render_speedometer(175.0, &mut surface);
        match surface.find(HUD_FILL_KEY).unwrap().destination {
            Destination::Rect(r) => {
                assert_eq!(r.width, 75.0);
                assert_eq!(r.height, 20.0);
            }
            Destination::Position(_) => panic!("fill is a rectangle"),
        }

        surface.clear();
        screen.render_speedometer(1000.0, &mut surface);
        match surface.find(HUD_FILL_KEY).unwrap().destination {
            Destination::Rect(r) => assert_eq!(r.width, 150.0),
            Destination::Position(_) => panic!("fill is a rectangle"),
        }
    }
}
