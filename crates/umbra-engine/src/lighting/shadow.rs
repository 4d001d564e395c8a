//! Shadow projection from rectangular occluders.
//!
//! Each (light, occluder) pair produces one shadow polygon per tick: the
//! occluder's corners plus the corners pushed away from the light, sorted
//! by angle around the occluder center. The angular sort is a deliberate
//! approximation of the true silhouette — level layouts were tuned around
//! its exact shapes, so it must not be replaced by a real visibility
//! polygon.

use glam::Vec2;

use crate::core::geometry::{normalize_or_zero, point_in_polygon};
use crate::lighting::light::Light;

/// A rectangular shadow caster. Static per level; the shadow system only
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occluder {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Occluder {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Corners in top-left, top-right, bottom-right, bottom-left order.
    fn corners(&self) -> [Vec2; 4] {
        let half = Vec2::new(self.width / 2.0, self.height / 2.0);
        [
            self.center + Vec2::new(-half.x, -half.y),
            self.center + Vec2::new(half.x, -half.y),
            self.center + Vec2::new(half.x, half.y),
            self.center + Vec2::new(-half.x, half.y),
        ]
    }
}

/// One shadow silhouette, valid for the tick it was built in.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowPolygon {
    points: Vec<Vec2>,
}

impl ShadowPolygon {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.points)
    }
}

/// Project the shadow a light throws past an occluder.
///
/// Returns `None` for lights at or below the casting threshold. Each corner
/// contributes itself plus a point extended from it along the light-to-corner
/// direction by twice the light radius; the 8 points are ordered by `atan2`
/// angle around the occluder center. A light sitting exactly on a corner
/// extends that corner by the zero vector instead of blowing up.
pub fn cast_shadow(light: &Light, occluder: &Occluder) -> Option<ShadowPolygon> {
    if !light.is_casting() {
        return None;
    }

    let mut points = Vec::with_capacity(8);
    for corner in occluder.corners() {
        let dir = normalize_or_zero(corner - light.pos);
        points.push(corner);
        points.push(corner + dir * light.radius * 2.0);
    }

    let center = occluder.center;
    points.sort_by(|a, b| {
        let angle_a = (a.y - center.y).atan2(a.x - center.x);
        let angle_b = (b.y - center.y).atan2(b.x - center.x);
        angle_a.partial_cmp(&angle_b).unwrap_or(std::cmp::Ordering::Equal)
    });

    Some(ShadowPolygon { points })
}
