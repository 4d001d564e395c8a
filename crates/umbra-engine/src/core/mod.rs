//! Engine-agnostic building blocks: geometry, timing, and the entity arena.

pub mod geometry;
pub mod scene;
pub mod time;
