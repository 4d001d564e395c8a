//! Aggregated shadow coverage for one simulation tick.

use glam::Vec2;

use crate::lighting::light::LightRegistry;
use crate::lighting::shadow::{cast_shadow, Occluder, ShadowPolygon};

/// All shadow polygons cast this tick, one per (casting light, occluder)
/// pair. Rebuilt from scratch every tick before any containment query runs;
/// polygons never survive into the next tick.
pub struct ShadowField {
    polygons: Vec<ShadowPolygon>,
}

impl ShadowField {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Drop last tick's polygons and recompute from the current light and
    /// occluder state. Iterates lights in registry insertion order and
    /// occluders in slice order, so the polygon sequence is deterministic.
    pub fn rebuild(&mut self, lights: &LightRegistry, occluders: &[Occluder]) {
        self.polygons.clear();
        for light in lights.iter().filter(|l| l.is_casting()) {
            for occluder in occluders {
                if let Some(polygon) = cast_shadow(light, occluder) {
                    self.polygons.push(polygon);
                }
            }
        }
    }

    /// Drop all polygons without recomputing (level unload).
    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Whether any shadow polygon contains the point. First match wins.
    pub fn contains(&self, point: Vec2) -> bool {
        self.polygons.iter().any(|p| p.contains(point))
    }

    pub fn polygons(&self) -> &[ShadowPolygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl Default for ShadowField {
    fn default() -> Self {
        Self::new()
    }
}
