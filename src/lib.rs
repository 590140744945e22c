//! Paddle Rally - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, opponent, game state)
//! - `render`: Render-target trait and the per-frame draw pass
//! - `input`: Keyboard-to-intent mapping
//! - `config`: Startup configuration surface

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{Difficulty, GameConfig, GameMode};
pub use sim::{GamePhase, GameSession, Side};

/// Game configuration defaults
pub mod consts {
    /// Playfield dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 459.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical paddle speed (pixels per tick)
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Per-axis displacement per tick before the speed multiplier
    pub const BALL_STEP: f32 = 4.0;
    /// Speed multiplier at the start of every rally
    pub const BALL_BASE_SPEED: f32 = 1.25;
    /// Multiplicative speed growth on each paddle return
    pub const BALL_SPEED_GROWTH: f32 = 1.1;

    /// Win condition
    pub const WIN_SCORE: u32 = 11;
    pub const WIN_MARGIN: u32 = 2;

    /// Chance per tick that the opponent pursues the true target
    pub const OPPONENT_SUCCESS_RATE: f32 = 0.55;
}
