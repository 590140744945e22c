//! Collision detection and scoring
//!
//! Per-tick pass order is fixed and load-bearing: paddle bounces, then the
//! top/bottom walls, then the scoring check. Scoring runs last and is
//! authoritative for horizontal exits, so a ball leaving through a corner
//! scores rather than reflecting.

use super::state::{Ball, GameSession, Paddle, Side};

/// Bounce the ball off a paddle if it overlaps the paddle's vertical
/// extent, is moving toward that paddle's side, and has reached the front
/// face. Inverts the horizontal direction and grows the speed.
///
/// The direction gate means a stationary paddle overlapping the ball can
/// not bounce it twice.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle, growth: f32) -> bool {
    let overlaps_vertically = ball.pos.y + ball.radius > paddle.y
        && ball.pos.y - ball.radius < paddle.y + paddle.height;
    if !overlaps_vertically || !ball.moving_toward(paddle.side) {
        return false;
    }

    let reached_face = match paddle.side {
        Side::Left => ball.pos.x - ball.radius < paddle.front_face_x(),
        Side::Right => ball.pos.x + ball.radius > paddle.front_face_x(),
    };
    if !reached_face {
        return false;
    }

    ball.dir.x = -ball.dir.x;
    ball.speed *= growth;
    true
}

/// Reflect the ball off the top/bottom walls. No speed change.
pub fn wall_bounce(ball: &mut Ball, surface_height: f32) -> bool {
    if ball.pos.y + ball.radius > surface_height || ball.pos.y - ball.radius < 0.0 {
        ball.dir.y = -ball.dir.y;
        true
    } else {
        false
    }
}

/// Which side scored, if the ball's horizontal extent left the surface.
pub fn check_scoring(ball: &Ball, surface_width: f32) -> Option<Side> {
    if ball.pos.x + ball.radius > surface_width {
        Some(Side::Left)
    } else if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Run the full collision pass for one tick over the already-updated ball
/// position. Returns the scoring side, if any; on a score the rally is
/// reset and the scoreboard updated.
pub fn resolve(session: &mut GameSession) -> Option<Side> {
    let growth = session.config.ball_speed_growth;
    for i in 0..session.paddles.len() {
        paddle_bounce(&mut session.ball, &session.paddles[i], growth);
    }
    wall_bounce(&mut session.ball, session.config.surface_height);

    let scorer = check_scoring(&session.ball, session.config.surface_width)?;
    session.scores[scorer.index()] += 1;
    log::info!(
        "{:?} scores; {} - {}",
        scorer,
        session.score(Side::Left),
        session.score(Side::Right)
    );
    session.reset_rally();
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::PaddleOwner;
    use glam::Vec2;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), 42)
    }

    #[test]
    fn test_paddle_bounce_inverts_and_grows() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Right, PaddleOwner::Human(1), &config);
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(paddle.x - 5.0, paddle.y + 50.0);
        ball.dir = Vec2::new(1.0, 1.0);

        assert!(paddle_bounce(&mut ball, &paddle, 1.1));
        assert_eq!(ball.dir.x, -1.0);
        assert!((ball.speed - 1.25 * 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_ignores_receding_ball() {
        // Ball overlapping the paddle but moving away must not bounce again
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Right, PaddleOwner::Human(1), &config);
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(paddle.x - 5.0, paddle.y + 50.0);
        ball.dir = Vec2::new(-1.0, 1.0);

        assert!(!paddle_bounce(&mut ball, &paddle, 1.1));
        assert_eq!(ball.dir.x, -1.0);
        assert_eq!(ball.speed, config.ball_base_speed);
    }

    #[test]
    fn test_paddle_requires_vertical_overlap() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Left, PaddleOwner::Computer, &config);
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(10.0, paddle.y + paddle.height + ball.radius + 1.0);
        ball.dir = Vec2::new(-1.0, -1.0);

        assert!(!paddle_bounce(&mut ball, &paddle, 1.1));
    }

    #[test]
    fn test_speed_growth_compounds_per_bounce() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Right, PaddleOwner::Human(1), &config);
        let mut ball = Ball::new(&config);

        let n = 5;
        for _ in 0..n {
            ball.pos = Vec2::new(paddle.x - 5.0, paddle.y + 50.0);
            ball.dir = Vec2::new(1.0, 1.0);
            assert!(paddle_bounce(&mut ball, &paddle, config.ball_speed_growth));
        }
        let expected = config.ball_base_speed * config.ball_speed_growth.powi(n);
        assert!((ball.speed - expected).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_keeps_speed() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        ball.pos.y = config.surface_height - 2.0;
        ball.speed = 3.0;
        ball.dir = Vec2::new(1.0, 1.0);

        assert!(wall_bounce(&mut ball, config.surface_height));
        assert_eq!(ball.dir.y, -1.0);
        assert_eq!(ball.speed, 3.0);
    }

    #[test]
    fn test_scoring_sides() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        assert_eq!(check_scoring(&ball, config.surface_width), None);

        ball.pos.x = config.surface_width - 1.0;
        assert_eq!(check_scoring(&ball, config.surface_width), Some(Side::Left));

        ball.pos.x = 1.0;
        assert_eq!(check_scoring(&ball, config.surface_width), Some(Side::Right));
    }

    #[test]
    fn test_resolve_increments_exactly_one() {
        let mut session = session();
        session.ball.pos = Vec2::new(session.config.surface_width + 5.0, 100.0);
        session.ball.dir = Vec2::new(1.0, 1.0);

        let scorer = resolve(&mut session);
        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(session.scores, [1, 0]);
        // Ball is back at center for the next rally
        assert_eq!(session.ball.pos, Vec2::new(400.0, 229.5));
        assert_eq!(session.ball.speed, session.config.ball_base_speed);
    }

    #[test]
    fn test_corner_exit_scores_rather_than_reflects() {
        // Ball simultaneously past the bottom wall and the right edge:
        // scoring is evaluated last and wins.
        let mut session = session();
        session.ball.pos = Vec2::new(
            session.config.surface_width + 2.0,
            session.config.surface_height + 2.0,
        );
        session.ball.dir = Vec2::new(1.0, 1.0);

        let scorer = resolve(&mut session);
        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(session.scores, [1, 0]);
    }

    #[test]
    fn test_resolve_recenters_computer_paddle() {
        let mut session = session();
        let side = session.computer_side().unwrap();
        session.paddle_mut(side).y = 10.0;
        session.ball.pos = Vec2::new(-5.0, 100.0);
        session.ball.dir = Vec2::new(-1.0, 1.0);

        resolve(&mut session);
        let paddle = session.paddle(side);
        assert_eq!(
            paddle.y,
            session.config.surface_height / 2.0 - paddle.height / 2.0
        );
    }
}
