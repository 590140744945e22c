//! Per-frame simulation step and game state machine
//!
//! The frame driver owns no timer: the embedder invokes `tick` once per
//! frame from its own timing source, and exactly one simulation step runs
//! per invocation. While paused, the tick is a no-op apart from command
//! handling, so the embedder can keep calling it for overlay rendering.

use super::state::{GamePhase, GameSession, Side};
use super::{collision, opponent, physics};

/// One-shot commands for a single tick. Paddle velocity intents are not
/// part of this; the input mapper writes those straight onto the paddles
/// and the step reads the latest values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start/restart command
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the session by one frame: consume commands, then run one
/// simulation step if the game is running.
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if input.pause {
        match session.phase {
            GamePhase::Running => {
                session.phase = GamePhase::Paused;
                log::info!("Paused");
            }
            GamePhase::Paused => {
                session.phase = GamePhase::Running;
                log::info!("Resumed");
            }
            _ => log::debug!("Pause ignored in {:?}", session.phase),
        }
    }

    if input.start {
        match session.phase {
            GamePhase::NotStarted | GamePhase::Over(_) => {
                session.reset();
                session.phase = GamePhase::Running;
                log::info!("Game started");
            }
            // Guard against accidental mid-game resets
            _ => log::debug!("Start ignored in {:?}", session.phase),
        }
    }

    if session.phase == GamePhase::Running {
        step(session);
    }
}

/// One simulation step: motion, collisions, scoring, win check, opponent.
fn step(session: &mut GameSession) {
    session.time_ticks += 1;

    let surface_height = session.config.surface_height;
    for paddle in &mut session.paddles {
        physics::advance_paddle(paddle, surface_height);
    }
    physics::advance_ball(&mut session.ball);

    let scored = collision::resolve(session).is_some();

    if scored
        && let Some(winner) = check_winner(session)
    {
        session.phase = GamePhase::Over(winner);
        log::info!(
            "Game over: {:?} wins {} - {}",
            winner,
            session.score(Side::Left),
            session.score(Side::Right)
        );
        return;
    }

    opponent::drive(session);
}

/// A side wins when its score reaches the target and leads by at least the
/// configured margin. The winner is whichever side is strictly ahead.
pub fn check_winner(session: &GameSession) -> Option<Side> {
    let left = session.score(Side::Left);
    let right = session.score(Side::Right);
    let target = session.config.win_score;
    let margin = session.config.win_margin;

    let concluded = (left >= target && left.saturating_sub(right) >= margin)
        || (right >= target && right.saturating_sub(left) >= margin);
    if !concluded {
        return None;
    }
    Some(if left > right { Side::Left } else { Side::Right })
}
