//! Heading and 16-point compass facing.
//!
//! The vehicle sprite sheet holds one image per compass direction. The
//! [`Heading`] component keeps the continuous direction of travel together
//! with the discrete [`CompassLabel`] used to pick the sprite.
//!
//! Screen space is y-down, so a heading of `(0, -1)` points "up" the screen
//! and resolves to [`CompassLabel::N`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use std::fmt;

/// Squared speed below which the facing is left untouched.
pub const HEADING_DEADBAND_SQ: f32 = 1.0;

/// Angular width of each compass bucket in degrees.
const BUCKET_DEGREES: f32 = 22.5;

/// Asset names collapse the secondary-intercardinal labels differently from
/// the compass. Labels not listed here are used verbatim.
const ASSET_KEY_REMAP: [(&str, &str); 4] = [
    ("ENE", "NEE"),
    ("ESE", "SEE"),
    ("WSW", "SWW"),
    ("WNW", "NWW"),
];

/// One of the 16 compass directions, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CompassLabel {
    #[default]
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassLabel {
    /// All labels in clockwise order starting at north.
    pub const ALL: [CompassLabel; 16] = [
        CompassLabel::N,
        CompassLabel::NNE,
        CompassLabel::NE,
        CompassLabel::ENE,
        CompassLabel::E,
        CompassLabel::ESE,
        CompassLabel::SE,
        CompassLabel::SSE,
        CompassLabel::S,
        CompassLabel::SSW,
        CompassLabel::SW,
        CompassLabel::WSW,
        CompassLabel::W,
        CompassLabel::WNW,
        CompassLabel::NW,
        CompassLabel::NNW,
    ];

    /// Label for a bucket index; wraps modulo 16.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The compass abbreviation, e.g. `"WNW"`.
    pub fn label(self) -> &'static str {
        match self {
            CompassLabel::N => "N",
            CompassLabel::NNE => "NNE",
            CompassLabel::NE => "NE",
            CompassLabel::ENE => "ENE",
            CompassLabel::E => "E",
            CompassLabel::ESE => "ESE",
            CompassLabel::SE => "SE",
            CompassLabel::SSE => "SSE",
            CompassLabel::S => "S",
            CompassLabel::SSW => "SSW",
            CompassLabel::SW => "SW",
            CompassLabel::WSW => "WSW",
            CompassLabel::W => "W",
            CompassLabel::WNW => "WNW",
            CompassLabel::NW => "NW",
            CompassLabel::NNW => "NNW",
        }
    }

    /// Name used by the sprite files for this direction.
    pub fn asset_key(self) -> &'static str {
        let label = self.label();
        ASSET_KEY_REMAP
            .iter()
            .find(|(compass, _)| *compass == label)
            .map(|(_, key)| *key)
            .unwrap_or(label)
    }

    /// Resolve a non-zero direction vector to its compass bucket.
    ///
    /// The angle is measured clockwise from screen-up and rounded to the
    /// nearest 22.5° bucket. Only the direction matters, not the magnitude.
    /// Passing a zero vector is a caller error; callers gate on
    /// [`HEADING_DEADBAND_SQ`].
    pub fn resolve(heading: Vector2) -> Self {
        let degrees = heading.y.atan2(heading.x).to_degrees();
        let degrees = (degrees + 90.0).rem_euclid(360.0);
        let index = (degrees / BUCKET_DEGREES).round() as usize;
        Self::from_index(index)
    }
}

impl fmt::Display for CompassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of travel and the sprite facing derived from it.
#[derive(Component, Clone, Copy, Debug)]
pub struct Heading {
    /// Unit vector of the last significant direction of travel.
    pub direction: Vector2,
    /// Compass bucket of `direction`.
    pub facing: CompassLabel,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            direction: Vector2 { x: 0.0, y: -1.0 },
            facing: CompassLabel::N,
        }
    }
}

impl Heading {
    /// Point the heading along `velocity` if it is outside the deadband.
    ///
    /// Returns `true` when the heading was updated. Below the deadband the
    /// previous direction and facing are kept.
    pub fn follow_velocity(&mut self, velocity: Vector2) -> bool {
        if velocity.length_sqr() <= HEADING_DEADBAND_SQ {
            return false;
        }
        self.direction = velocity.normalized();
        self.facing = CompassLabel::resolve(self.direction);
        true
    }

    /// Back to facing north.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sprite asset key of the current facing.
    pub fn asset_key(&self) -> &'static str {
        self.facing.asset_key()
    }
}
