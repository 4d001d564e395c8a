//! Input intent types consumed by the simulation.

pub mod intents;

pub use intents::Intents;
