use glam::Vec2;

use crate::effects::EffectsState;
use crate::entities::Simulated;
use crate::lighting::shadow::Occluder;

/// A static rectangular platform. Platforms are the level's shadow casters
/// and the surfaces the player walks on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// The platform as seen by the shadow projector.
    pub fn occluder(&self) -> Occluder {
        Occluder::new(self.center, self.width, self.height)
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }
}

impl Simulated for Platform {
    fn advance(&mut self, _dt: f32, _fx: &mut EffectsState) {}
}
