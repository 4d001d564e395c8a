//! Level descriptions: the static layout tables a level supplies once at
//! load. Parsed from JSON or taken from the built-in library; the core
//! never mutates a `Level` after spawning it.

pub mod library;

use serde::{Deserialize, Serialize};

use crate::lighting::light::Rgb;

/// A 2D point in level data. Kept as named fields so authored JSON reads
/// naturally; converted to `glam::Vec2` at spawn time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for glam::Vec2 {
    fn from(p: Point) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

/// A complete level description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    /// World extents; bounds are centered on the origin.
    pub width: f32,
    pub height: f32,
    pub start: Point,
    pub exit: Point,
    #[serde(default = "default_background")]
    pub background: Rgb,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub gates: Vec<GateDef>,
    #[serde(default)]
    pub lights: Vec<LightDef>,
    #[serde(default)]
    pub switches: Vec<SwitchDef>,
    #[serde(default)]
    pub mirrors: Vec<MirrorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDef {
    /// Stable id switches refer to.
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    #[serde(default = "default_light_color")]
    pub color: Rgb,
    pub intensity: f32,
    /// Intensity a switch restores the light to.
    #[serde(default = "default_max_intensity")]
    pub max_intensity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchDef {
    pub x: f32,
    pub y: f32,
    /// Ids of the lights this switch toggles. Unknown ids are tolerated.
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorDef {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_mirror_angle")]
    pub angle: f32,
    #[serde(default = "default_reflectivity")]
    pub reflectivity: f32,
}

fn default_background() -> Rgb {
    Rgb::new(10, 25, 33)
}

fn default_light_color() -> Rgb {
    Rgb::new(255, 220, 180)
}

fn default_max_intensity() -> f32 {
    1.0
}

fn default_mirror_angle() -> f32 {
    45.0
}

fn default_reflectivity() -> f32 {
    0.8
}

impl Level {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
