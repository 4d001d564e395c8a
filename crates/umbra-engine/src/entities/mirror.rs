use glam::Vec2;

use crate::core::geometry::normalize_or_zero;
use crate::effects::EffectsState;
use crate::entities::{Simulated, INTERACTION_RADIUS, INTERACT_COOLDOWN};
use crate::lighting::light::{Light, LightRegistry};

/// Degrees per second a held directional intent turns a rotating mirror.
pub const ROTATION_RATE: f32 = 45.0;

/// Fraction of the incoming intensity the reflected light keeps, on top of
/// the mirror's own reflectivity.
const REFLECTED_INTENSITY_FACTOR: f32 = 0.8;

/// Radius of the reflected light relative to its source, fixed at creation.
const REFLECTED_RADIUS_FACTOR: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    Static,
    Rotating,
}

/// A player-rotatable mirror that bounces nearby lights into a single
/// synthetic reflected light.
///
/// The synthetic light lives in the shared registry (it casts shadows like
/// any other light) but only its owning mirror writes to it. Once created
/// it is never removed; on ticks where no source light qualifies it simply
/// keeps its last position and intensity.
#[derive(Debug, Clone)]
pub struct Mirror {
    pub pos: Vec2,
    angle: f32,
    pub mode: MirrorMode,
    pub interaction_radius: f32,
    pub reflectivity: f32,
    reflection_id: String,
    has_reflection: bool,
    cooldown: f32,
}

impl Mirror {
    /// `reflection_id` names the synthetic light this mirror will own in
    /// the registry; it must be unique across the level.
    pub fn new(pos: Vec2, reflection_id: impl Into<String>) -> Self {
        Self {
            pos,
            angle: 45.0,
            mode: MirrorMode::Static,
            interaction_radius: INTERACTION_RADIUS,
            reflectivity: 0.8,
            reflection_id: reflection_id.into(),
            has_reflection: false,
            cooldown: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.set_angle(angle);
        self
    }

    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }

    /// Face angle in degrees, always in [0, 360).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Write the face angle, wrapped into [0, 360).
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(360.0);
    }

    /// Unit normal of the mirror face.
    pub fn normal(&self) -> Vec2 {
        Vec2::from_angle(self.angle.to_radians())
    }

    /// Id of the synthetic light, once it exists in the registry.
    pub fn reflected_light_id(&self) -> Option<&str> {
        self.has_reflection.then_some(self.reflection_id.as_str())
    }

    /// Flip between static and rotating if the player is close enough,
    /// interaction intent is held, and the cooldown has expired.
    pub fn try_toggle_mode(&mut self, player_pos: Vec2, interact: bool) -> bool {
        if !interact || self.cooldown > 0.0 {
            return false;
        }
        if player_pos.distance(self.pos) >= self.interaction_radius {
            return false;
        }
        self.mode = match self.mode {
            MirrorMode::Static => MirrorMode::Rotating,
            MirrorMode::Rotating => MirrorMode::Static,
        };
        self.cooldown = INTERACT_COOLDOWN;
        true
    }

    /// Turn the face per held directional intent. Only rotating mirrors move.
    pub fn rotate(&mut self, left: bool, right: bool, dt: f32) {
        if self.mode != MirrorMode::Rotating {
            return;
        }
        let mut angle = self.angle;
        if left {
            angle -= ROTATION_RATE * dt;
        }
        if right {
            angle += ROTATION_RATE * dt;
        }
        self.set_angle(angle);
    }

    /// Recompute the reflected light from the current registry state.
    ///
    /// Every casting light within its own radius of the mirror and hitting
    /// the front face (positive dot of incident direction and normal)
    /// produces a reflection sample; when several qualify in one tick the
    /// last in registry order wins. The mirror's own synthetic light is
    /// skipped, so it cannot feed back on itself; another mirror's
    /// reflection remains a valid source.
    pub fn update_reflection(&mut self, lights: &mut LightRegistry) {
        let normal = self.normal();
        let mut sample = None;

        for light in lights.iter() {
            if light.id == self.reflection_id || !light.is_casting() {
                continue;
            }
            let to_mirror = self.pos - light.pos;
            if to_mirror.length() > light.radius {
                continue;
            }
            let incident = normalize_or_zero(to_mirror);
            let facing = incident.dot(normal);
            if facing <= 0.0 {
                continue;
            }
            let bounce = incident - 2.0 * facing * normal;
            sample = Some((
                self.pos + bounce * light.radius * self.reflectivity,
                light.intensity() * self.reflectivity * REFLECTED_INTENSITY_FACTOR,
                light.color,
                light.radius * REFLECTED_RADIUS_FACTOR,
            ));
        }

        let Some((pos, intensity, color, radius)) = sample else {
            return;
        };
        if self.has_reflection {
            if let Some(light) = lights.get_mut(&self.reflection_id) {
                light.pos = pos;
                light.set_intensity(intensity);
            }
        } else {
            let light = Light::new(self.reflection_id.clone(), pos, radius, color, intensity);
            self.has_reflection = lights.add(light);
        }
    }
}

impl Simulated for Mirror {
    fn advance(&mut self, dt: f32, _fx: &mut EffectsState) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::light::Rgb;

    fn warm() -> Rgb {
        Rgb::new(255, 220, 180)
    }

    #[test]
    fn angle_wraps_on_every_write() {
        let mut mirror = Mirror::new(Vec2::ZERO, "m1").with_angle(0.0);
        mirror.set_angle(-10.0);
        assert!((mirror.angle() - 350.0).abs() < 1e-4);
        mirror.set_angle(725.0);
        assert!((mirror.angle() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_only_while_rotating() {
        let mut mirror = Mirror::new(Vec2::ZERO, "m1").with_angle(0.0);
        mirror.rotate(false, true, 1.0);
        assert_eq!(mirror.angle(), 0.0);

        mirror.mode = MirrorMode::Rotating;
        mirror.rotate(false, true, 1.0);
        assert!((mirror.angle() - ROTATION_RATE).abs() < 1e-4);
        mirror.rotate(true, false, 2.0);
        assert!((mirror.angle() - 315.0).abs() < 1e-3);
    }

    #[test]
    fn mode_toggle_obeys_proximity_and_cooldown() {
        let mut mirror = Mirror::new(Vec2::ZERO, "m1");
        assert!(!mirror.try_toggle_mode(Vec2::new(100.0, 0.0), true));
        assert!(mirror.try_toggle_mode(Vec2::new(10.0, 0.0), true));
        assert_eq!(mirror.mode, MirrorMode::Rotating);
        // Still cooling down.
        assert!(!mirror.try_toggle_mode(Vec2::new(10.0, 0.0), true));

        let mut fx = EffectsState::new(1);
        for _ in 0..31 {
            mirror.advance(1.0 / 60.0, &mut fx);
        }
        assert!(mirror.try_toggle_mode(Vec2::new(10.0, 0.0), true));
        assert_eq!(mirror.mode, MirrorMode::Static);
    }

    #[test]
    fn head_on_light_reflects_straight_back() {
        // Light on the mirror normal: incident (1,0), normal (1,0), so the
        // bounce is (-1,0) — straight back toward the light.
        let mut lights = LightRegistry::new();
        lights.add(Light::new("sun", Vec2::new(-100.0, 0.0), 100.0, warm(), 1.0));
        let mut mirror = Mirror::new(Vec2::ZERO, "m1")
            .with_angle(0.0)
            .with_reflectivity(0.5);

        mirror.update_reflection(&mut lights);

        let reflected = lights.get("m1").expect("synthetic light created");
        assert!((reflected.pos.x - (-50.0)).abs() < 1e-4);
        assert!(reflected.pos.y.abs() < 1e-4);
        assert!((reflected.intensity() - 0.4).abs() < 1e-6);
        assert_eq!(reflected.color, warm());
        assert!((reflected.radius - 70.0).abs() < 1e-4);
        assert_eq!(mirror.reflected_light_id(), Some("m1"));
    }

    #[test]
    fn back_face_light_produces_no_reflection() {
        let mut lights = LightRegistry::new();
        // Behind the face: incident (-1,0) against normal (1,0).
        lights.add(Light::new("sun", Vec2::new(100.0, 0.0), 200.0, warm(), 1.0));
        let mut mirror = Mirror::new(Vec2::ZERO, "m1").with_angle(0.0);
        mirror.update_reflection(&mut lights);
        assert!(lights.get("m1").is_none());
        assert!(mirror.reflected_light_id().is_none());
    }

    #[test]
    fn out_of_range_and_dim_lights_are_skipped() {
        let mut lights = LightRegistry::new();
        lights.add(Light::new("far", Vec2::new(-500.0, 0.0), 100.0, warm(), 1.0));
        lights.add(Light::new("dim", Vec2::new(-50.0, 0.0), 100.0, warm(), 0.1));
        let mut mirror = Mirror::new(Vec2::ZERO, "m1").with_angle(0.0);
        mirror.update_reflection(&mut lights);
        assert!(lights.get("m1").is_none());
    }

    #[test]
    fn last_qualifying_light_wins() {
        let mut lights = LightRegistry::new();
        lights.add(Light::new("first", Vec2::new(-100.0, 0.0), 100.0, warm(), 1.0));
        lights.add(Light::new("second", Vec2::new(-80.0, 0.0), 200.0, Rgb::new(10, 20, 30), 0.5));
        let mut mirror = Mirror::new(Vec2::ZERO, "m1")
            .with_angle(0.0)
            .with_reflectivity(0.5);

        mirror.update_reflection(&mut lights);

        let reflected = lights.get("m1").unwrap();
        // Second light's color and derived intensity.
        assert_eq!(reflected.color, Rgb::new(10, 20, 30));
        assert!((reflected.intensity() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn reflection_persists_at_stale_values_when_source_goes_dark() {
        let mut lights = LightRegistry::new();
        lights.add(Light::new("sun", Vec2::new(-100.0, 0.0), 100.0, warm(), 1.0));
        let mut mirror = Mirror::new(Vec2::ZERO, "m1")
            .with_angle(0.0)
            .with_reflectivity(0.5);

        mirror.update_reflection(&mut lights);
        let before = lights.get("m1").unwrap().clone();

        lights.get_mut("sun").unwrap().set_intensity(0.0);
        mirror.update_reflection(&mut lights);

        let after = lights.get("m1").unwrap();
        assert_eq!(after.pos, before.pos);
        assert_eq!(after.intensity(), before.intensity());
    }

    #[test]
    fn mirror_never_reflects_its_own_synthetic_light() {
        let mut lights = LightRegistry::new();
        lights.add(Light::new("sun", Vec2::new(-100.0, 0.0), 100.0, warm(), 1.0));
        let mut mirror = Mirror::new(Vec2::ZERO, "m1")
            .with_angle(0.0)
            .with_reflectivity(0.5);

        mirror.update_reflection(&mut lights);
        // Turn the source off; the synthetic light at (-50, 0) would itself
        // qualify as a source if it weren't excluded.
        lights.get_mut("sun").unwrap().set_intensity(0.0);
        let before = lights.get("m1").unwrap().clone();
        mirror.update_reflection(&mut lights);
        assert_eq!(lights.get("m1").unwrap().pos, before.pos);
    }
}
