//! Shared per-frame game state, threaded explicitly through every update.

/// Scene mode of the gameplay state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Level,
    LevelTransition,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub screen_width: f32,
    pub screen_height: f32,
    pub mode: GameMode,
    /// Difficulty multiplier; rises during play, reset per level.
    pub increment: f32,
}

impl GameState {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        GameState {
            screen_width,
            screen_height,
            mode: GameMode::Level,
            increment: 1.0,
        }
    }
}
