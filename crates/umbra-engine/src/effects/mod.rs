//! Visual effects: short-lived particles spawned by gameplay moments.
//!
//! The `EffectsState` facade owns the particle pool and a seeded RNG; all
//! randomness in the simulation flows through it, keeping ticks replayable.

mod particle;
mod rng;

pub use particle::Particle;
pub use rng::Rng;

use glam::Vec2;

use crate::lighting::light::Rgb;

/// Palette shared by the particle emitters.
pub const SLATE: Rgb = Rgb::new(90, 105, 112);
pub const DUSK: Rgb = Rgb::new(45, 35, 57);
pub const STEEL: Rgb = Rgb::new(61, 75, 82);
pub const BRASS: Rgb = Rgb::new(191, 169, 124);
pub const PARCHMENT: Rgb = Rgb::new(217, 200, 163);

/// Oldest particles are dropped beyond this count.
const MAX_PARTICLES: usize = 256;

/// Container for all live particles.
pub struct EffectsState {
    particles: Vec<Particle>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create an EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Advance all particles and drop the expired ones, trimming the pool
    /// oldest-first when it overflows.
    pub fn tick(&mut self, dt: f32) {
        self.particles.retain_mut(|p| p.tick(dt));
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Kicked-up dust under the feet on takeoff.
    pub fn jump_dust(&mut self, feet: Vec2, in_shadow_form: bool) {
        let color = if in_shadow_form { DUSK } else { SLATE };
        for _ in 0..10 {
            let pos = feet + Vec2::new(self.rng.next_range(-10.0, 10.0), 0.0);
            let vel = Vec2::new(
                self.rng.next_range(-30.0, 30.0),
                self.rng.next_range(-150.0, -50.0),
            );
            let size = self.rng.next_range(2.0, 8.0);
            let life = self.rng.next_range(0.2, 0.7);
            self.push(Particle::new(pos, vel, size, life, color));
        }
    }

    /// Heavier dust spray on landing.
    pub fn landing_dust(&mut self, feet: Vec2, in_shadow_form: bool) {
        let color = if in_shadow_form { DUSK } else { SLATE };
        for _ in 0..15 {
            let pos = feet + Vec2::new(self.rng.next_range(-15.0, 15.0), 0.0);
            let vel = Vec2::new(
                self.rng.next_range(-40.0, 40.0),
                self.rng.next_range(-100.0, -20.0),
            );
            let size = self.rng.next_range(3.0, 8.0);
            let life = self.rng.next_range(0.3, 0.9);
            self.push(Particle::new(pos, vel, size, life, color));
        }
    }

    /// A single dark wisp drifting off a shadow-formed body.
    pub fn shadow_wisp(&mut self, center: Vec2) {
        let pos = center
            + Vec2::new(
                self.rng.next_range(-20.0, 20.0),
                self.rng.next_range(-40.0, 40.0),
            );
        let vel = Vec2::new(
            self.rng.next_range(-10.0, 10.0),
            self.rng.next_range(-40.0, -10.0),
        );
        let size = self.rng.next_range(4.0, 12.0);
        let life = self.rng.next_range(0.4, 1.2);
        self.push(Particle::new(pos, vel, size, life, DUSK).with_alpha(0.7));
    }

    /// A dissolving wisp for leaving shadow form.
    pub fn form_fade(&mut self, center: Vec2) {
        let pos = center
            + Vec2::new(
                self.rng.next_range(-20.0, 20.0),
                self.rng.next_range(-40.0, 40.0),
            );
        let vel = Vec2::new(
            self.rng.next_range(-20.0, 20.0),
            self.rng.next_range(-60.0, -20.0),
        );
        let size = self.rng.next_range(5.0, 15.0);
        let life = self.rng.next_range(0.3, 0.9);
        self.push(
            Particle::new(pos, vel, size, life, DUSK)
                .with_alpha(0.5)
                .with_fade_out(),
        );
    }

    /// Scattered burst when the player dies.
    pub fn death_burst(&mut self, center: Vec2, in_shadow_form: bool) {
        let color = if in_shadow_form { DUSK } else { SLATE };
        for _ in 0..30 {
            let pos = center
                + Vec2::new(
                    self.rng.next_range(-20.0, 20.0),
                    self.rng.next_range(-40.0, 40.0),
                );
            let vel = Vec2::new(
                self.rng.next_range(-100.0, 100.0),
                self.rng.next_range(-300.0, -100.0),
            );
            let size = self.rng.next_range(5.0, 15.0);
            let life = self.rng.next_range(0.5, 2.0);
            self.push(Particle::new(pos, vel, size, life, color).with_fade_out());
        }
    }

    /// Sparks off a toggled switch, tinted by its new state.
    pub fn switch_flash(&mut self, center: Vec2, is_on: bool) {
        let color = if is_on { BRASS } else { STEEL };
        for _ in 0..10 {
            let pos = center
                + Vec2::new(
                    self.rng.next_range(-10.0, 10.0),
                    self.rng.next_range(-10.0, 10.0),
                );
            let vel = Vec2::new(
                self.rng.next_range(-20.0, 20.0),
                self.rng.next_range(-50.0, -10.0),
            );
            let size = self.rng.next_range(2.0, 7.0);
            let life = self.rng.next_range(0.2, 0.7);
            self.push(
                Particle::new(pos, vel, size, life, color)
                    .with_alpha(0.8)
                    .with_fade_out(),
            );
        }
    }

    /// Glints when a mirror switches between static and rotating.
    pub fn mirror_shimmer(&mut self, center: Vec2) {
        for _ in 0..5 {
            let pos = center
                + Vec2::new(
                    self.rng.next_range(-20.0, 20.0),
                    self.rng.next_range(-40.0, 40.0),
                );
            let vel = Vec2::new(
                self.rng.next_range(-15.0, 15.0),
                self.rng.next_range(-40.0, -10.0),
            );
            let size = self.rng.next_range(2.0, 6.0);
            let life = self.rng.next_range(0.2, 0.6);
            self.push(
                Particle::new(pos, vel, size, life, PARCHMENT)
                    .with_alpha(0.6)
                    .with_fade_out(),
            );
        }
    }

    /// Ambient wisp somewhere inside a gate's rectangle.
    pub fn gate_wisp(&mut self, center: Vec2, width: f32, height: f32) {
        let pos = center
            + Vec2::new(
                self.rng.next_range(-width / 2.0, width / 2.0),
                self.rng.next_range(-height / 2.0, height / 2.0),
            );
        let vel = Vec2::new(
            self.rng.next_range(-5.0, 5.0),
            self.rng.next_range(-30.0, -10.0),
        );
        let size = self.rng.next_range(2.0, 7.0);
        let life = self.rng.next_range(0.4, 1.2);
        self.push(
            Particle::new(pos, vel, size, life, DUSK)
                .with_alpha(0.5)
                .with_fade_out(),
        );
    }

    /// Dust where a gate shoved the player back.
    pub fn block_dust(&mut self, center: Vec2) {
        for _ in 0..3 {
            let pos = center
                + Vec2::new(
                    self.rng.next_range(-10.0, 10.0),
                    self.rng.next_range(-20.0, 20.0),
                );
            let vel = Vec2::new(
                self.rng.next_range(-20.0, 20.0),
                self.rng.next_range(-40.0, -10.0),
            );
            let size = self.rng.next_range(3.0, 9.0);
            let life = self.rng.next_range(0.3, 0.8);
            self.push(
                Particle::new(pos, vel, size, life, DUSK)
                    .with_alpha(0.7)
                    .with_fade_out(),
            );
        }
    }

    /// A sparkle orbiting out of the exit portal.
    pub fn exit_sparkle(&mut self, center: Vec2) {
        let angle = self.rng.next_range(0.0, std::f32::consts::TAU);
        let dir = Vec2::from_angle(angle);
        let pos = center + dir * self.rng.next_range(0.0, 30.0);
        let vel = dir * self.rng.next_range(5.0, 15.0);
        let size = self.rng.next_range(2.0, 6.0);
        let life = self.rng.next_range(0.3, 0.9);
        self.push(
            Particle::new(pos, vel, size, life, PARCHMENT)
                .with_alpha(0.6)
                .with_fade_out(),
        );
    }
}
