//! Dust, wisp, and spark particles. Presentation data only — nothing in the
//! simulation reads particle state back.

use glam::Vec2;

use crate::lighting::light::Rgb;

/// Downward acceleration applied to every particle, world units/s².
const PARTICLE_GRAVITY: f32 = 300.0;

/// A single short-lived particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub life: f32,
    pub color: Rgb,
    pub alpha: f32,
    pub fade_out: bool,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, life: f32, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            size,
            life,
            color,
            alpha: 1.0,
            fade_out: false,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_fade_out(mut self) -> Self {
        self.fade_out = true;
        self
    }

    /// Advance particle physics. Returns false when expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.pos += self.vel * dt;
        self.vel.y += PARTICLE_GRAVITY * dt;
        self.life -= dt;
        if self.fade_out {
            self.alpha = self.life.clamp(0.0, 1.0);
        }
        self.life > 0.0
    }
}
