//! Computer opponent controller
//!
//! Computes a target y for the controlled paddle each tick and steers
//! toward it at full paddle speed. Difficulty tiers change how the target
//! is found; the success-rate gate can replace it with a random decoy to
//! model an intentional miss. All randomness comes from the injected RNG
//! so a seeded session replays exactly.

use rand::Rng;

use super::state::{Ball, GameSession, Paddle};
use crate::config::GameConfig;

/// Compute the y the paddle should chase this tick.
///
/// Easy/Medium track the ball with tier-dependent uniform noise. Hard
/// extrapolates the ball's trajectory while it approaches, and falls back
/// to plain tracking while it recedes. Independent of tier, with
/// probability `1 - success_rate` the target is discarded for a uniformly
/// random position; this rolls every tick, not once per rally.
pub fn compute_target<R: Rng>(
    ball: &Ball,
    paddle: &Paddle,
    config: &GameConfig,
    rng: &mut R,
) -> f32 {
    let half_height = paddle.height / 2.0;
    let mut target = ball.pos.y - half_height;

    if let Some((lo, hi)) = config.difficulty.noise_range() {
        target += rng.random_range(lo..hi);
    } else if config.difficulty.predicts() && ball.moving_toward(paddle.side) {
        // dy/dx is the trajectory slope; scale by the horizontal distance
        // still to cover
        let slope = ball.dir.y / ball.dir.x;
        target = ball.pos.y + (paddle.x - ball.pos.x) * slope - half_height;
    }

    if rng.random::<f32>() > config.success_rate {
        // Intentional miss: chase a decoy position instead
        target = rng.random_range(0.0..config.surface_height - paddle.height);
    }

    target
}

/// Velocity intent toward `target`: full speed up or down, or hold on
/// exact alignment. The comparison is on raw y with no tolerance band, so
/// the paddle visibly chatters around the target; that is long-standing
/// behavior, kept as-is.
pub fn steer_toward(paddle: &Paddle, target: f32, paddle_speed: f32) -> f32 {
    if paddle.y < target {
        paddle_speed
    } else if paddle.y > target {
        -paddle_speed
    } else {
        0.0
    }
}

/// Recompute the computer paddle's velocity intent from the latest ball
/// state. No-op when no paddle is computer-owned.
pub fn drive(session: &mut GameSession) {
    let Some(side) = session.computer_side() else {
        return;
    };
    let ball = session.ball;
    let paddle = session.paddles[side.index()];
    let target = compute_target(&ball, &paddle, &session.config, &mut session.rng);
    session.paddles[side.index()].dy =
        steer_toward(&paddle, target, session.config.paddle_speed);
}
