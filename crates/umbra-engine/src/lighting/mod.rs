//! Dynamic lighting and shadow simulation: the light registry, per-pair
//! shadow projection, and the per-tick aggregated shadow field.

pub mod field;
pub mod light;
pub mod shadow;

pub use field::ShadowField;
pub use light::{Light, LightRegistry, Rgb, MIN_CASTING_INTENSITY};
pub use shadow::{cast_shadow, Occluder, ShadowPolygon};
