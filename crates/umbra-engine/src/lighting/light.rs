/// Dynamic point lights for the 2D shadow simulation.
///
/// Lights are persistent and addressable by a stable string id — switches
/// toggle them and mirrors write synthetic reflected lights through the
/// same registry. Intensity 0 means the light contributes no illumination
/// and casts no shadow.
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lights at or below this intensity are treated as off for shadow casting
/// and mirror reflection, even though a renderer may still draw a faint glow.
pub const MIN_CASTING_INTENSITY: f32 = 0.1;

/// RGB color in 0–255 channels, matching the level authoring tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A point light with position, falloff radius, color, and a toggleable
/// intensity. `max_intensity` is the level a switch restores the light to;
/// it defaults to 1.0 for lights authored without an explicit maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub id: String,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    intensity: f32,
    pub max_intensity: f32,
}

impl Light {
    pub fn new(id: impl Into<String>, pos: Vec2, radius: f32, color: Rgb, intensity: f32) -> Self {
        Self {
            id: id.into(),
            pos,
            radius,
            color,
            intensity: intensity.clamp(0.0, 1.0),
            max_intensity: 1.0,
        }
    }

    /// Set the intensity a switch restores this light to.
    pub fn with_max_intensity(mut self, max_intensity: f32) -> Self {
        self.max_intensity = max_intensity.clamp(0.0, 1.0);
        self
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Write the intensity, clamped into [0, 1].
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.clamp(0.0, 1.0);
    }

    /// Whether this light currently casts shadows and drives reflections.
    pub fn is_casting(&self) -> bool {
        self.intensity > MIN_CASTING_INTENSITY
    }
}

/// Insertion-ordered collection of lights, addressable by id.
///
/// The ordered backing `Vec` keeps shadow-field rebuilds and mirror scans
/// deterministic. Add/remove report whether they took effect, so level
/// loading can surface authoring mistakes without aborting.
pub struct LightRegistry {
    lights: Vec<Light>,
}

impl LightRegistry {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Create a registry with a specific light capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lights: Vec::with_capacity(capacity),
        }
    }

    /// Add a light. Returns false (and leaves the registry untouched) when
    /// a light with the same id already exists.
    pub fn add(&mut self, light: Light) -> bool {
        if self.contains(&light.id) {
            log::warn!("duplicate light id {:?} ignored", light.id);
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Remove a light by id. Returns the removed light if found.
    pub fn remove(&mut self, id: &str) -> Option<Light> {
        let idx = self.lights.iter().position(|l| l.id == id)?;
        Some(self.lights.remove(idx))
    }

    /// Get a reference to a light by id.
    pub fn get(&self, id: &str) -> Option<&Light> {
        self.lights.iter().find(|l| l.id == id)
    }

    /// Get a mutable reference to a light by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Light> {
        self.lights.iter_mut().find(|l| l.id == id)
    }

    /// Whether a light with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.lights.iter().any(|l| l.id == id)
    }

    /// Iterate over lights in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    /// Iterate over lights mutably, in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Light> {
        self.lights.iter_mut()
    }

    /// Number of lights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }
}

impl Default for LightRegistry {
    fn default() -> Self {
        Self::new()
    }
}
