use glam::Vec2;

use crate::effects::EffectsState;
use crate::entities::{Simulated, INTERACTION_RADIUS, INTERACT_COOLDOWN};
use crate::lighting::light::LightRegistry;

/// A proximity-activated toggle driving one or more lights by id.
///
/// Toggling ON restores each target to its `max_intensity`; toggling OFF
/// zeroes it. Target ids that don't resolve in the registry are skipped —
/// a level authoring mistake must never abort a tick.
#[derive(Debug, Clone)]
pub struct LightSwitch {
    pub pos: Vec2,
    pub is_on: bool,
    pub targets: Vec<String>,
    pub interaction_radius: f32,
    cooldown: f32,
}

impl LightSwitch {
    pub fn new(pos: Vec2, targets: Vec<String>) -> Self {
        Self {
            pos,
            is_on: false,
            targets,
            interaction_radius: INTERACTION_RADIUS,
            cooldown: 0.0,
        }
    }

    /// Whether a recent activation is still locking this switch out.
    pub fn cooling_down(&self) -> bool {
        self.cooldown > 0.0
    }

    /// Toggle if the player is close enough, interaction intent is held,
    /// and the cooldown has expired. Returns whether the toggle happened.
    /// Held intent re-triggers once per cooldown window.
    pub fn try_activate(
        &mut self,
        player_pos: Vec2,
        interact: bool,
        lights: &mut LightRegistry,
    ) -> bool {
        if !interact || self.cooling_down() {
            return false;
        }
        if player_pos.distance(self.pos) >= self.interaction_radius {
            return false;
        }

        self.is_on = !self.is_on;
        for id in &self.targets {
            match lights.get_mut(id) {
                Some(light) => {
                    let level = if self.is_on { light.max_intensity } else { 0.0 };
                    light.set_intensity(level);
                }
                None => log::debug!("switch target light {id:?} not in registry"),
            }
        }
        self.cooldown = INTERACT_COOLDOWN;
        true
    }
}

impl Simulated for LightSwitch {
    fn advance(&mut self, dt: f32, _fx: &mut EffectsState) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }
}
