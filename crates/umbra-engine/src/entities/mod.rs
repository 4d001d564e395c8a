//! Level entities: the closed set of things a level can contain.
//!
//! Every entity kind is a named variant; per-tick behavior goes through
//! the `Simulated` capability, resolved at compile time.

pub mod exit;
pub mod gate;
pub mod mirror;
pub mod platform;
pub mod player;
pub mod switch;

pub use exit::LevelExit;
pub use gate::ShadowGate;
pub use mirror::{Mirror, MirrorMode};
pub use platform::Platform;
pub use player::{Player, PlayerForm, ShadowMeter};
pub use switch::LightSwitch;

use crate::effects::EffectsState;

/// Player distance within which interaction intent reaches an entity.
pub const INTERACTION_RADIUS: f32 = 60.0;

/// Seconds after an activation during which held interaction intent is
/// ignored. Modeled as a per-entity countdown, never a host timer.
pub const INTERACT_COOLDOWN: f32 = 0.5;

/// Per-tick upkeep every entity kind performs before input is applied:
/// cooldown countdowns and ambient particle emission.
pub trait Simulated {
    fn advance(&mut self, dt: f32, fx: &mut EffectsState);
}

/// A level entity. Closed set — adding a kind means adding a variant here
/// and handling it in the world's tick phases.
#[derive(Debug)]
pub enum Entity {
    Platform(Platform),
    Switch(LightSwitch),
    Mirror(Mirror),
    Gate(ShadowGate),
    Exit(LevelExit),
}

impl Simulated for Entity {
    fn advance(&mut self, dt: f32, fx: &mut EffectsState) {
        match self {
            Entity::Platform(p) => p.advance(dt, fx),
            Entity::Switch(s) => s.advance(dt, fx),
            Entity::Mirror(m) => m.advance(dt, fx),
            Entity::Gate(g) => g.advance(dt, fx),
            Entity::Exit(e) => e.advance(dt, fx),
        }
    }
}
