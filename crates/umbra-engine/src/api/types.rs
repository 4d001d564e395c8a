/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Discrete things that happened during a tick, reported to the host.
/// The host decides the presentation (screens, meters, haptics); the core
/// only states facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LevelComplete,
    GameOver,
    ShadowFormEntered,
    ShadowFormExited { forced: bool },
    SwitchToggled { on: bool },
    MirrorModeChanged { rotating: bool },
    GateBlocked,
}

impl GameEvent {
    /// Floats per encoded event cell: `[kind, a, b, c]`.
    pub const FLOATS: usize = 4;

    /// Wire encoding for the bridge's flat event buffer.
    pub fn encode(&self) -> [f32; Self::FLOATS] {
        match *self {
            GameEvent::LevelComplete => [1.0, 0.0, 0.0, 0.0],
            GameEvent::GameOver => [2.0, 0.0, 0.0, 0.0],
            GameEvent::ShadowFormEntered => [3.0, 0.0, 0.0, 0.0],
            GameEvent::ShadowFormExited { forced } => [4.0, forced as u32 as f32, 0.0, 0.0],
            GameEvent::SwitchToggled { on } => [5.0, on as u32 as f32, 0.0, 0.0],
            GameEvent::MirrorModeChanged { rotating } => [6.0, rotating as u32 as f32, 0.0, 0.0],
            GameEvent::GateBlocked => [7.0, 0.0, 0.0, 0.0],
        }
    }
}
