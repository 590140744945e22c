//! Game state and core simulation types
//!
//! The whole simulation hangs off one `GameSession` owned by the caller.
//! No globals, no singletons; subsystems borrow the session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, GameMode};

/// The two scoring sides of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Array index for per-side storage (paddles, scores)
    pub fn index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Sign of "toward this side" along x (-1 for left, +1 for right)
    pub fn direction(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleOwner {
    /// Human player slot (0 = left bindings, 1 = right bindings)
    Human(usize),
    /// Driven by the opponent controller
    Computer,
}

/// A paddle. `x` is fixed per side; only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity intent (signed paddle speed, or zero)
    pub dy: f32,
    pub owner: PaddleOwner,
}

impl Paddle {
    pub fn new(side: Side, owner: PaddleOwner, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => config.surface_width - config.paddle_width,
        };
        Self {
            side,
            x,
            y: config.surface_height / 2.0 - config.paddle_height / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            dy: 0.0,
            owner,
        }
    }

    /// Center vertically and stop
    pub fn recenter(&mut self, surface_height: f32) {
        self.y = surface_height / 2.0 - self.height / 2.0;
        self.dy = 0.0;
    }

    /// The x coordinate of the face the ball bounces off
    pub fn front_face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x + self.width,
            Side::Right => self.x,
        }
    }
}

/// The ball. Direction is sign-only per axis; magnitude comes from
/// `step * speed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Per-axis direction signs (components are -1.0 or +1.0)
    pub dir: Vec2,
    /// Per-axis base displacement per tick
    pub step: f32,
    /// Scalar speed multiplier; grows within a rally, reset between rallies
    pub speed: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.surface_width / 2.0, config.surface_height / 2.0),
            radius: config.ball_radius,
            dir: Vec2::new(1.0, 1.0),
            step: config.ball_step,
            speed: config.ball_base_speed,
        }
    }

    /// Whether the ball is moving toward the given side
    pub fn moving_toward(&self, side: Side) -> bool {
        self.dir.x * side.direction() > 0.0
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start command
    NotStarted,
    /// Active gameplay
    Running,
    /// Simulation frozen, overlay shown
    Paused,
    /// A side reached the win condition
    Over(Side),
}

/// Complete session state, owned by one caller and passed by reference
/// into each subsystem.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    /// All opponent noise and serve flips draw from here
    pub rng: Pcg32,
    /// Indexed by `Side::index()`
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Indexed by `Side::index()`; mutated only by the collision engine
    pub scores: [u32; 2],
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a fresh session in `NotStarted`
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let left_owner = match config.mode {
            GameMode::Single => PaddleOwner::Computer,
            GameMode::Multiplayer => PaddleOwner::Human(0),
        };
        let paddles = [
            Paddle::new(Side::Left, left_owner, &config),
            Paddle::new(Side::Right, PaddleOwner::Human(1), &config),
        ];
        let ball = Ball::new(&config);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            paddles,
            ball,
            scores: [0, 0],
            phase: GamePhase::NotStarted,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    /// The computer-driven side, if any
    pub fn computer_side(&self) -> Option<Side> {
        self.paddles
            .iter()
            .find(|p| p.owner == PaddleOwner::Computer)
            .map(|p| p.side)
    }

    /// Full reset: scores cleared, paddles and ball recentered, phase back
    /// to `NotStarted`. Deterministic, so resetting twice equals resetting
    /// once.
    pub fn reset(&mut self) {
        self.scores = [0, 0];
        let surface_height = self.config.surface_height;
        for paddle in &mut self.paddles {
            paddle.recenter(surface_height);
        }
        self.ball = Ball::new(&self.config);
        self.phase = GamePhase::NotStarted;
    }

    /// Start a new rally after a scoring event: ball back to center at base
    /// speed, serving toward the side that just conceded, with a random
    /// vertical sign. The computer paddle recenters.
    pub fn reset_rally(&mut self) {
        self.ball.pos = Vec2::new(
            self.config.surface_width / 2.0,
            self.config.surface_height / 2.0,
        );
        self.ball.speed = self.config.ball_base_speed;
        self.ball.dir.x = -self.ball.dir.x;
        self.ball.dir.y = if self.rng.random_bool(0.5) { -1.0 } else { 1.0 };

        if let Some(side) = self.computer_side() {
            let surface_height = self.config.surface_height;
            self.paddle_mut(side).recenter(surface_height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let session = GameSession::new(GameConfig::default(), 42);
        assert_eq!(session.phase, GamePhase::NotStarted);
        assert_eq!(session.scores, [0, 0]);
        assert_eq!(session.paddle(Side::Left).x, 0.0);
        assert_eq!(session.paddle(Side::Right).x, 800.0 - 15.0);
        assert_eq!(session.ball.pos, Vec2::new(400.0, 229.5));
    }

    #[test]
    fn test_single_mode_owns_left_paddle() {
        let session = GameSession::new(GameConfig::default(), 42);
        assert_eq!(session.computer_side(), Some(Side::Left));
        assert_eq!(session.paddle(Side::Right).owner, PaddleOwner::Human(1));
    }

    #[test]
    fn test_multiplayer_has_no_computer() {
        let config = GameConfig {
            mode: GameMode::Multiplayer,
            ..Default::default()
        };
        let session = GameSession::new(config, 42);
        assert_eq!(session.computer_side(), None);
        assert_eq!(session.paddle(Side::Left).owner, PaddleOwner::Human(0));
    }

    #[test]
    fn test_reset_idempotent() {
        let mut session = GameSession::new(GameConfig::default(), 7);
        session.scores = [4, 9];
        session.ball.pos.x = 13.0;
        session.ball.speed = 3.0;
        session.phase = GamePhase::Running;

        session.reset();
        let once = session.clone();
        session.reset();

        assert_eq!(session.scores, once.scores);
        assert_eq!(session.ball, once.ball);
        assert_eq!(session.paddles, once.paddles);
        assert_eq!(session.phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_rally_reset_serves_toward_conceding_side() {
        let mut session = GameSession::new(GameConfig::default(), 7);
        session.ball.dir = Vec2::new(1.0, 1.0);
        session.ball.speed = 2.5;
        session.ball.pos.x = 790.0;

        session.reset_rally();
        assert_eq!(session.ball.dir.x, -1.0);
        assert!(session.ball.dir.y == 1.0 || session.ball.dir.y == -1.0);
        assert_eq!(session.ball.speed, session.config.ball_base_speed);
        assert_eq!(session.ball.pos, Vec2::new(400.0, 229.5));
    }

    #[test]
    fn test_moving_toward() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        ball.dir = Vec2::new(-1.0, 1.0);
        assert!(ball.moving_toward(Side::Left));
        assert!(!ball.moving_toward(Side::Right));
    }
}
