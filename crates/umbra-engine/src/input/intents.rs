/// The per-tick input intent vector.
///
/// The host (keyboard or touch layer) resolves raw device input into these
/// held booleans before every tick; the core never sees keys or touches.
/// Edge-triggered behavior (the shadow-form toggle) is derived inside the
/// world by comparing against the previous tick's intents, so hosts only
/// have to report held state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    /// Directional intent consumed by rotating mirrors.
    pub left: bool,
    pub right: bool,
    /// Player horizontal movement.
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Held shadow-form toggle; the world reacts to its rising edge.
    pub activate_form: bool,
    /// Held interaction intent for switches and mirrors (cooldown-gated,
    /// not edge-gated).
    pub activate_interact: bool,
}

impl Intents {
    pub fn none() -> Self {
        Self::default()
    }
}
