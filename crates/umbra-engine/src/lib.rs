pub mod api;
pub mod bridge;
pub mod core;
pub mod effects;
pub mod entities;
pub mod input;
pub mod level;
pub mod lighting;

// Re-export key types at crate root for convenience
pub use api::types::{EntityId, GameEvent};
pub use api::world::{TickResult, World, WorldBounds, FIXED_DT};
pub use bridge::protocol::{
    pack_events, pack_lights, pack_particles, pack_shadows, LightInstance, ParticleInstance,
    EVENT_FLOATS, LIGHT_FLOATS, PARTICLE_FLOATS,
};
pub use core::geometry::{aabb_overlap, normalize_or_zero, point_in_polygon};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use effects::{EffectsState, Particle, Rng};
pub use entities::{
    Entity, LevelExit, LightSwitch, Mirror, MirrorMode, Platform, Player, PlayerForm, ShadowGate,
    ShadowMeter, Simulated,
};
pub use input::intents::Intents;
pub use level::library::builtin_levels;
pub use level::Level;
pub use lighting::{
    cast_shadow, Light, LightRegistry, Occluder, Rgb, ShadowField, ShadowPolygon,
    MIN_CASTING_INTENSITY,
};
