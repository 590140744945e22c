//! Startup configuration surface
//!
//! Read once at initialization, never hot-reloaded. The simulation trusts
//! these values; out-of-range settings are the embedder's problem.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Opponent difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Uniform noise range added to the tracking target, per tier.
    /// Hard omits noise and predicts the trajectory instead.
    pub fn noise_range(&self) -> Option<(f32, f32)> {
        match self {
            Difficulty::Easy => Some((-20.0, 0.0)),
            Difficulty::Medium => Some((-10.0, 10.0)),
            Difficulty::Hard => None,
        }
    }

    /// Whether this tier extrapolates the ball's trajectory
    pub fn predicts(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

/// Who drives the second paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One human paddle, one computer paddle
    #[default]
    Single,
    /// Two human paddles
    Multiplayer,
}

/// Up/down key pair for one player slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl KeyBindings {
    pub fn new(up: &str, down: &str) -> Self {
        Self {
            up: up.to_string(),
            down: down.to_string(),
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield dimensions
    pub surface_width: f32,
    pub surface_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical speed in pixels per tick
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis displacement per tick before the speed multiplier
    pub ball_step: f32,
    /// Speed multiplier at the start of every rally
    pub ball_base_speed: f32,
    /// Multiplicative speed growth on each paddle return (> 1)
    pub ball_speed_growth: f32,

    // === Win condition ===
    pub win_score: u32,
    /// Minimum lead required in addition to reaching `win_score`
    pub win_margin: u32,

    // === Opponent ===
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Chance per tick that the opponent pursues the true target
    pub success_rate: f32,

    // === Input ===
    /// Key bindings per player slot (left paddle, right paddle)
    pub bindings: [KeyBindings; 2],
    /// Pause toggle key (matched case-insensitively)
    pub pause_key: String,
    /// Start/restart key
    pub start_key: String,

    // === Palette (RGBA, passed through to the render target) ===
    pub left_color: [f32; 4],
    pub right_color: [f32; 4],
    pub ball_color: [f32; 4],
    pub text_color: [f32; 4],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_step: BALL_STEP,
            ball_base_speed: BALL_BASE_SPEED,
            ball_speed_growth: BALL_SPEED_GROWTH,

            win_score: WIN_SCORE,
            win_margin: WIN_MARGIN,

            mode: GameMode::Single,
            difficulty: Difficulty::Easy,
            success_rate: OPPONENT_SUCCESS_RATE,

            bindings: [
                KeyBindings::new("w", "s"),
                KeyBindings::new("ArrowUp", "ArrowDown"),
            ],
            pause_key: "p".to_string(),
            start_key: " ".to_string(),

            left_color: [1.0, 0.0, 0.0, 1.0],
            right_color: [0.0, 0.59, 1.0, 1.0],
            ball_color: [1.0, 1.0, 1.0, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl GameConfig {
    /// Element holding the embedded JSON configuration (wasm32 only)
    #[allow(dead_code)]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Load configuration from an embedded `<script type="application/json">`
    /// block in the page, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID));

        if let Some(element) = element
            && let Some(json) = element.text_content()
        {
            match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded game config from page");
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed game config: {e}"),
            }
        }

        log::info!("Using default game config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.win_score, config.win_score);
        assert_eq!(back.bindings, config.bindings);
        assert_eq!(back.difficulty, config.difficulty);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"mode":"multiplayer","win_score":5}"#).unwrap();
        assert_eq!(config.mode, GameMode::Multiplayer);
        assert_eq!(config.win_score, 5);
        assert_eq!(config.win_margin, WIN_MARGIN);
        assert_eq!(config.paddle_height, PADDLE_HEIGHT);
    }
}
