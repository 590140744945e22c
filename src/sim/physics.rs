//! Motion integration for paddles and ball
//!
//! Pure position updates. Boundary response for the ball lives in
//! `collision`; only the paddle clamps here.

use super::state::{Ball, Paddle};

/// Advance a paddle by its velocity intent, clamped into
/// `[0, surface_height - height]`.
pub fn advance_paddle(paddle: &mut Paddle, surface_height: f32) {
    paddle.y += paddle.dy;
    paddle.y = paddle.y.clamp(0.0, surface_height - paddle.height);
}

/// Advance the ball one tick. No clamping; walls are handled by the
/// collision engine.
pub fn advance_ball(ball: &mut Ball) {
    ball.pos += ball.dir * ball.step * ball.speed;
}
