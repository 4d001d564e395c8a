use glam::Vec2;

use crate::core::geometry::aabb_overlap;
use crate::effects::EffectsState;
use crate::entities::player::Player;
use crate::entities::Simulated;

/// Seconds between ambient wisps drifting off a gate.
const WISP_INTERVAL: f32 = 0.2;

/// A barrier only a shadow-formed player can pass.
///
/// The permission check is keyed off the player's *form*, never off shadow
/// containment — a shadow-formed player walks through a gate standing in
/// full light. Containment drains the form's resource instead (see the
/// player's meter update).
#[derive(Debug, Clone)]
pub struct ShadowGate {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    wisp_timer: f32,
}

impl ShadowGate {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            width,
            height,
            wisp_timer: 0.0,
        }
    }

    /// Block a non-shadow-formed player overlapping the gate: push them out
    /// horizontally to the gate edge on their side of the gate center and
    /// zero their horizontal velocity. Returns whether a block happened.
    pub fn resolve(&self, player: &mut Player) -> bool {
        if !aabb_overlap(
            self.pos,
            Vec2::new(self.width, self.height),
            player.pos,
            player.size(),
        ) {
            return false;
        }
        if player.is_in_shadow_form() {
            return false;
        }

        let half = self.width / 2.0 + player.size().x / 2.0;
        if player.pos.x < self.pos.x {
            player.pos.x = self.pos.x - half;
        } else {
            player.pos.x = self.pos.x + half;
        }
        player.stop_horizontal();
        true
    }
}

impl Simulated for ShadowGate {
    fn advance(&mut self, dt: f32, fx: &mut EffectsState) {
        self.wisp_timer += dt;
        if self.wisp_timer > WISP_INTERVAL {
            fx.gate_wisp(self.pos, self.width, self.height);
            self.wisp_timer = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player::PlayerForm;

    #[test]
    fn blocks_normal_form_and_zeroes_velocity() {
        let gate = ShadowGate::new(Vec2::new(500.0, 350.0), 20.0, 100.0);
        let mut player = Player::new(Vec2::new(495.0, 350.0));
        player.vel.x = 300.0;

        assert!(gate.resolve(&mut player));
        // Pushed to the left edge: gate center - gate half - player half.
        assert_eq!(player.pos.x, 500.0 - 10.0 - 20.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn pushes_toward_the_side_the_player_is_on() {
        let gate = ShadowGate::new(Vec2::new(0.0, 0.0), 20.0, 100.0);
        let mut player = Player::new(Vec2::new(5.0, 0.0));
        player.vel.x = -300.0;
        assert!(gate.resolve(&mut player));
        assert_eq!(player.pos.x, 30.0);
    }

    #[test]
    fn shadow_form_passes_regardless_of_shadow_state() {
        let gate = ShadowGate::new(Vec2::new(500.0, 350.0), 20.0, 100.0);
        let mut player = Player::new(Vec2::new(498.0, 350.0));
        player.form = PlayerForm::Shadow;
        player.vel.x = 300.0;

        // No shadow field anywhere near — form alone grants passage.
        assert!(!gate.resolve(&mut player));
        assert_eq!(player.pos.x, 498.0);
        assert_eq!(player.vel.x, 300.0);
    }

    #[test]
    fn non_overlapping_player_is_untouched() {
        let gate = ShadowGate::new(Vec2::new(500.0, 350.0), 20.0, 100.0);
        let mut player = Player::new(Vec2::new(300.0, 350.0));
        player.vel.x = 120.0;
        assert!(!gate.resolve(&mut player));
        assert_eq!(player.vel.x, 120.0);
    }

    #[test]
    fn ambient_wisps_emit_on_the_interval() {
        let mut gate = ShadowGate::new(Vec2::ZERO, 20.0, 100.0);
        let mut fx = EffectsState::new(1);
        for _ in 0..13 {
            gate.advance(1.0 / 60.0, &mut fx);
        }
        assert_eq!(fx.count(), 1);
    }
}
