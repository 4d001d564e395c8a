use glam::Vec2;

use crate::core::geometry::aabb_overlap;
use crate::effects::EffectsState;
use crate::entities::player::Player;
use crate::entities::Simulated;

const EXIT_WIDTH: f32 = 60.0;
const EXIT_HEIGHT: f32 = 100.0;

/// Seconds between ambient sparkles around the portal.
const SPARKLE_INTERVAL: f32 = 0.1;

/// The level's exit portal. Touching it completes the level.
#[derive(Debug, Clone)]
pub struct LevelExit {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    sparkle_timer: f32,
}

impl LevelExit {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: EXIT_WIDTH,
            height: EXIT_HEIGHT,
            sparkle_timer: 0.0,
        }
    }

    pub fn overlaps(&self, player: &Player) -> bool {
        aabb_overlap(
            self.pos,
            Vec2::new(self.width, self.height),
            player.pos,
            player.size(),
        )
    }
}

impl Simulated for LevelExit {
    fn advance(&mut self, dt: f32, fx: &mut EffectsState) {
        self.sparkle_timer += dt;
        if self.sparkle_timer > SPARKLE_INTERVAL {
            fx.exit_sparkle(self.pos);
            self.sparkle_timer = 0.0;
        }
    }
}
