//! Flat f32 buffers the JS renderer reads each frame.
//!
//! Every record type has a fixed float width; counts travel separately
//! through the bridge's accessor functions. Color channels stay in 0–255 to
//! match the shell's `rgba()` formatting.

use bytemuck::{Pod, Zeroable};

use crate::api::types::GameEvent;
use crate::effects::EffectsState;
use crate::lighting::field::ShadowField;
use crate::lighting::light::LightRegistry;

/// Floats per packed light (wire format — never changes).
pub const LIGHT_FLOATS: usize = 8;

/// Floats per packed particle (wire format — never changes).
pub const PARTICLE_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// One light as the renderer sees it:
/// `[x, y, r, g, b, intensity, radius, pad]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LightInstance {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub radius: f32,
    pub pad: f32,
}

/// One particle as the renderer sees it:
/// `[x, y, size, r, g, b, alpha, pad]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub pad: f32,
}

/// Pack all lights in registry order. Dark lights are included — the
/// renderer may still draw a faint source marker for them.
pub fn pack_lights(lights: &LightRegistry, out: &mut Vec<LightInstance>) {
    out.clear();
    for light in lights.iter() {
        out.push(LightInstance {
            x: light.pos.x,
            y: light.pos.y,
            r: light.color.r as f32,
            g: light.color.g as f32,
            b: light.color.b as f32,
            intensity: light.intensity(),
            radius: light.radius,
            pad: 0.0,
        });
    }
}

/// Pack the shadow field as point-count-prefixed polygon runs:
/// `[n, x0, y0, x1, y1, ...]` per polygon.
pub fn pack_shadows(field: &ShadowField, out: &mut Vec<f32>) {
    out.clear();
    for polygon in field.polygons() {
        out.push(polygon.points().len() as f32);
        for p in polygon.points() {
            out.push(p.x);
            out.push(p.y);
        }
    }
}

/// Pack live particles in pool order.
pub fn pack_particles(effects: &EffectsState, out: &mut Vec<ParticleInstance>) {
    out.clear();
    for particle in effects.particles() {
        out.push(ParticleInstance {
            x: particle.pos.x,
            y: particle.pos.y,
            size: particle.size,
            r: particle.color.r as f32,
            g: particle.color.g as f32,
            b: particle.color.b as f32,
            alpha: particle.alpha,
            pad: 0.0,
        });
    }
}

/// Pack this tick's events into flat cells.
pub fn pack_events(events: &[GameEvent], out: &mut Vec<f32>) {
    out.clear();
    for event in events {
        out.extend_from_slice(&event.encode());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::light::{Light, Rgb};
    use crate::lighting::shadow::Occluder;
    use glam::Vec2;

    #[test]
    fn light_instance_is_eight_floats() {
        assert_eq!(std::mem::size_of::<LightInstance>(), LIGHT_FLOATS * 4);
        assert_eq!(std::mem::size_of::<ParticleInstance>(), PARTICLE_FLOATS * 4);
    }

    #[test]
    fn packed_lights_follow_registry_order() {
        let mut lights = LightRegistry::new();
        lights.add(Light::new("a", Vec2::new(1.0, 2.0), 300.0, Rgb::new(255, 220, 180), 0.8));
        lights.add(Light::new("b", Vec2::new(3.0, 4.0), 250.0, Rgb::new(10, 20, 30), 0.0));

        let mut out = Vec::new();
        pack_lights(&lights, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].x, 1.0);
        assert_eq!(out[1].r, 10.0);
        // Dark lights still ship to the renderer.
        assert_eq!(out[1].intensity, 0.0);

        // The Pod derive keeps the buffer castable to raw floats.
        let floats: &[f32] = bytemuck::cast_slice(&out);
        assert_eq!(floats.len(), 2 * LIGHT_FLOATS);
    }

    #[test]
    fn shadow_buffer_prefixes_each_polygon_with_its_point_count() {
        let mut lights = LightRegistry::new();
        lights.add(Light::new("l", Vec2::new(0.0, -300.0), 300.0, Rgb::new(255, 220, 180), 1.0));
        let occluders = [
            Occluder::new(Vec2::ZERO, 100.0, 100.0),
            Occluder::new(Vec2::new(300.0, 0.0), 50.0, 50.0),
        ];
        let mut field = ShadowField::new();
        field.rebuild(&lights, &occluders);

        let mut out = Vec::new();
        pack_shadows(&field, &mut out);
        // Two polygons of 8 points: 2 × (1 + 16) floats.
        assert_eq!(out.len(), 2 * 17);
        assert_eq!(out[0], 8.0);
        assert_eq!(out[17], 8.0);
    }

    #[test]
    fn event_buffer_is_four_floats_per_event() {
        let events = [
            GameEvent::LevelComplete,
            GameEvent::SwitchToggled { on: true },
        ];
        let mut out = Vec::new();
        pack_events(&events, &mut out);
        assert_eq!(out.len(), 2 * EVENT_FLOATS);
        assert_eq!(out[4], 5.0);
        assert_eq!(out[5], 1.0);
    }
}
