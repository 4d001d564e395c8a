use glam::Vec2;

use crate::api::types::GameEvent;
use crate::effects::EffectsState;
use crate::entities::platform::Platform;
use crate::input::intents::Intents;
use crate::lighting::field::ShadowField;

// Movement tuning, world units and seconds.
const MOVE_SPEED: f32 = 300.0;
const JUMP_FORCE: f32 = 550.0;
const GRAVITY: f32 = 1500.0;
const GROUND_FRICTION: f32 = 0.85;
const AIR_FRICTION: f32 = 0.95;
const MAX_FALL_SPEED: f32 = 1000.0;
/// Horizontal speeds below this snap to zero so friction terminates.
const STOP_SPEED: f32 = 10.0;
/// Small upward pop on death.
const DEATH_BOUNCE: f32 = -300.0;

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 80.0;
/// Distance from the body center to the feet contact point.
const FEET_OFFSET: f32 = 42.0;

// Shadow form resource tuning (seconds and per-second rates).
const METER_MAX: f32 = 5.0;
const METER_DRAIN_RATE: f32 = 1.0;
/// Extra drain applied while shadow-formed outside any shadow; together
/// with the base rate the total drain triples.
const METER_PENALTY_DRAIN_RATE: f32 = 2.0;
const METER_RECHARGE_RATE: f32 = 0.5;
/// Minimum charge required to enter shadow form.
const FORM_ENTRY_MINIMUM: f32 = 0.5;

/// Chance per tick of a wisp drifting off a shadow-formed body.
const FORM_WISP_CHANCE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerForm {
    Normal,
    Shadow,
}

/// The depleting/recharging resource behind shadow form.
/// `remaining` is clamped into [0, max] on every write.
#[derive(Debug, Clone)]
pub struct ShadowMeter {
    remaining: f32,
    pub max: f32,
    pub drain_rate: f32,
    pub penalty_drain_rate: f32,
    pub recharge_rate: f32,
}

impl ShadowMeter {
    fn new() -> Self {
        Self {
            remaining: METER_MAX,
            max: METER_MAX,
            drain_rate: METER_DRAIN_RATE,
            penalty_drain_rate: METER_PENALTY_DRAIN_RATE,
            recharge_rate: METER_RECHARGE_RATE,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Remaining charge as a fraction of max, for meters and HUDs.
    pub fn fraction(&self) -> f32 {
        self.remaining / self.max
    }

    fn set(&mut self, value: f32) {
        self.remaining = value.clamp(0.0, self.max);
    }
}

/// The player: side-scroller movement, platform collision, and the
/// shadow-form state machine. All collaborators (platforms, the shadow
/// field, effects, the event sink) arrive as parameters — the player never
/// reaches into ambient state.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub form: PlayerForm,
    pub meter: ShadowMeter,
    pub is_grounded: bool,
    pub is_jumping: bool,
    pub facing_right: bool,
    pub is_dead: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            form: PlayerForm::Normal,
            meter: ShadowMeter::new(),
            is_grounded: false,
            is_jumping: false,
            facing_right: true,
            is_dead: false,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// The feet contact point, below the body center.
    pub fn feet(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, FEET_OFFSET)
    }

    pub fn is_in_shadow_form(&self) -> bool {
        self.form == PlayerForm::Shadow
    }

    pub fn stop_horizontal(&mut self) {
        self.vel.x = 0.0;
    }

    /// React to the rising edge of the form intent: leave shadow form, or
    /// enter it if enough charge remains.
    pub fn handle_form_toggle(
        &mut self,
        form_edge: bool,
        fx: &mut EffectsState,
        events: &mut Vec<GameEvent>,
    ) {
        if !form_edge || self.is_dead {
            return;
        }
        if self.is_in_shadow_form() {
            self.exit_shadow_form(false, fx, events);
        } else if self.meter.remaining() > FORM_ENTRY_MINIMUM {
            self.enter_shadow_form(fx, events);
        }
    }

    fn enter_shadow_form(&mut self, fx: &mut EffectsState, events: &mut Vec<GameEvent>) {
        self.form = PlayerForm::Shadow;
        for _ in 0..20 {
            fx.shadow_wisp(self.pos);
        }
        events.push(GameEvent::ShadowFormEntered);
    }

    fn exit_shadow_form(
        &mut self,
        forced: bool,
        fx: &mut EffectsState,
        events: &mut Vec<GameEvent>,
    ) {
        self.form = PlayerForm::Normal;
        for _ in 0..10 {
            fx.form_fade(self.pos);
        }
        events.push(GameEvent::ShadowFormExited { forced });
    }

    /// Movement intent, physics integration, and platform collision for one
    /// tick. The shadow field is the one rebuilt earlier this tick; it
    /// decides whether a shadow-formed player phases through platform sides.
    pub fn update_movement(
        &mut self,
        dt: f32,
        intents: &Intents,
        platforms: &[Platform],
        field: &ShadowField,
        fx: &mut EffectsState,
    ) {
        if self.is_dead {
            return;
        }
        self.apply_input(intents, fx);
        self.apply_physics(dt);
        self.collide_platforms(dt, platforms, field, fx);
    }

    fn apply_input(&mut self, intents: &Intents, fx: &mut EffectsState) {
        if intents.move_left {
            self.vel.x = -MOVE_SPEED;
            self.facing_right = false;
        } else if intents.move_right {
            self.vel.x = MOVE_SPEED;
            self.facing_right = true;
        }

        if intents.jump && self.is_grounded && !self.is_jumping {
            self.vel.y = -JUMP_FORCE;
            self.is_jumping = true;
            self.is_grounded = false;
            fx.jump_dust(self.feet(), self.is_in_shadow_form());
        }
    }

    fn apply_physics(&mut self, dt: f32) {
        self.vel.y += GRAVITY * dt;
        self.vel.x *= if self.is_grounded {
            GROUND_FRICTION
        } else {
            AIR_FRICTION
        };

        self.pos += self.vel * dt;

        if self.vel.y > MAX_FALL_SPEED {
            self.vel.y = MAX_FALL_SPEED;
        }
        if self.vel.x.abs() < STOP_SPEED {
            self.vel.x = 0.0;
        }
    }

    fn collide_platforms(
        &mut self,
        dt: f32,
        platforms: &[Platform],
        field: &ShadowField,
        fx: &mut EffectsState,
    ) {
        self.is_grounded = false;

        for platform in platforms {
            // Landing: the feet segment crossed the platform top this tick
            // while the body overlaps it horizontally (quarter-width margin).
            if self.vel.y >= 0.0 {
                let feet_y = self.pos.y + FEET_OFFSET;
                let prev_feet_y = self.pos.y - self.vel.y * dt + FEET_OFFSET;
                let top = platform.top();

                if prev_feet_y <= top
                    && feet_y >= top
                    && self.pos.x + PLAYER_WIDTH / 4.0 >= platform.left()
                    && self.pos.x - PLAYER_WIDTH / 4.0 <= platform.right()
                {
                    self.pos.y = top - FEET_OFFSET;
                    self.vel.y = 0.0;
                    self.is_grounded = true;
                    if self.is_jumping {
                        self.is_jumping = false;
                        fx.landing_dust(self.feet(), self.is_in_shadow_form());
                    }
                }
            }

            // Side collision with a third-width margin. A shadow-formed
            // player standing in shadow melds through instead.
            if self.pos.x + PLAYER_WIDTH / 3.0 > platform.left()
                && self.pos.x - PLAYER_WIDTH / 3.0 < platform.right()
                && self.pos.y + PLAYER_HEIGHT / 2.0 > platform.top()
                && self.pos.y - PLAYER_HEIGHT / 2.0 < platform.bottom()
            {
                if self.is_in_shadow_form() && field.contains(self.pos) {
                    continue;
                }
                if self.vel.x > 0.0 {
                    self.pos.x = platform.left() - PLAYER_WIDTH / 3.0;
                } else if self.vel.x < 0.0 {
                    self.pos.x = platform.right() + PLAYER_WIDTH / 3.0;
                }
                self.vel.x = 0.0;
            }
        }
    }

    /// Kill the player (one-shot). Dead players stop simulating.
    pub fn die(&mut self, fx: &mut EffectsState, events: &mut Vec<GameEvent>) {
        if self.is_dead {
            return;
        }
        self.is_dead = true;
        self.vel = Vec2::new(0.0, DEATH_BOUNCE);
        fx.death_burst(self.pos, self.is_in_shadow_form());
        events.push(GameEvent::GameOver);
    }

    /// Drain or recharge the shadow meter. `in_shadow` is this tick's
    /// shadow-field containment of the player position; standing in light
    /// while shadow-formed triples the drain. Hitting zero forces the
    /// player back to normal form.
    pub fn update_shadow_meter(
        &mut self,
        dt: f32,
        in_shadow: bool,
        fx: &mut EffectsState,
        events: &mut Vec<GameEvent>,
    ) {
        if self.is_dead {
            return;
        }
        if self.is_in_shadow_form() {
            let mut rate = self.meter.drain_rate;
            if !in_shadow {
                rate += self.meter.penalty_drain_rate;
            }
            self.meter.set(self.meter.remaining() - rate * dt);

            if fx.rng.chance(FORM_WISP_CHANCE) {
                fx.shadow_wisp(self.pos);
            }
            if self.meter.remaining() <= 0.0 {
                self.exit_shadow_form(true, fx, events);
            }
        } else {
            self.meter.set(self.meter.remaining() + self.meter.recharge_rate * dt);
        }
    }
}
