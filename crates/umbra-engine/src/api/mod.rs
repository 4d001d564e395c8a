//! Host-facing simulation API: the world, its tick loop, and event types.

pub mod types;
pub mod world;
