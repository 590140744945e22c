//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One step per external frame callback, no internal timers
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod physics;
pub mod state;
pub mod tick;

pub use state::{Ball, GamePhase, GameSession, Paddle, PaddleOwner, Side};
pub use tick::{TickInput, check_winner, tick};
