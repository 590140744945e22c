//! Render-target abstraction and the per-frame draw pass
//!
//! The simulation never touches pixels. A `RenderTarget` is injected at
//! the boundary and receives plain drawing commands; the core exposes
//! read-only snapshots of the paddles, ball, scores, and display mode.

use glam::Vec2;

use crate::sim::{GamePhase, GameSession, Side};

const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Drawing capabilities the embedder provides. Colors are RGBA in 0..1.
pub trait RenderTarget {
    fn clear(&mut self, color: [f32; 4]);
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    fn draw_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: [f32; 4]);
}

/// What the frame should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    StartPrompt,
    Playing,
    PausedOverlay,
    GameOver(Side),
}

/// Map the session phase to a display mode
pub fn display_mode(session: &GameSession) -> DisplayMode {
    match session.phase {
        GamePhase::NotStarted => DisplayMode::StartPrompt,
        GamePhase::Running => DisplayMode::Playing,
        GamePhase::Paused => DisplayMode::PausedOverlay,
        GamePhase::Over(winner) => DisplayMode::GameOver(winner),
    }
}

/// Draw one frame of the current session state.
pub fn draw_frame(session: &GameSession, target: &mut dyn RenderTarget) {
    let config = &session.config;
    let center = Vec2::new(config.surface_width / 2.0, config.surface_height / 2.0);

    target.clear(BACKGROUND);

    match display_mode(session) {
        DisplayMode::StartPrompt => {
            target.draw_text(
                "Press Space to Start",
                Vec2::new(center.x - 130.0, center.y),
                30.0,
                config.text_color,
            );
        }
        DisplayMode::PausedOverlay => {
            target.draw_text(
                "Paused",
                Vec2::new(center.x - 50.0, center.y),
                30.0,
                config.text_color,
            );
        }
        DisplayMode::GameOver(winner) => {
            let message = match winner {
                Side::Left => "Player 1 wins!",
                Side::Right => "Player 2 wins!",
            };
            target.draw_text(
                message,
                Vec2::new(center.x - 120.0, center.y),
                30.0,
                config.text_color,
            );
            target.draw_text(
                "Press Space to Play Again",
                Vec2::new(center.x - 130.0, center.y + 50.0),
                20.0,
                config.text_color,
            );
        }
        DisplayMode::Playing => {
            for paddle in &session.paddles {
                let color = match paddle.side {
                    Side::Left => config.left_color,
                    Side::Right => config.right_color,
                };
                target.draw_rect(
                    Vec2::new(paddle.x, paddle.y),
                    Vec2::new(paddle.width, paddle.height),
                    color,
                );
            }

            target.draw_circle(session.ball.pos, session.ball.radius, config.ball_color);

            target.draw_text(
                &session.score(Side::Left).to_string(),
                Vec2::new(center.x - 50.0, 50.0),
                30.0,
                config.text_color,
            );
            target.draw_text(
                &session.score(Side::Right).to_string(),
                Vec2::new(center.x + 25.0, 50.0),
                30.0,
                config.text_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Rect(Vec2, Vec2),
        Circle(Vec2, f32),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl RenderTarget for Recorder {
        fn clear(&mut self, _color: [f32; 4]) {
            self.calls.push(Call::Clear);
        }
        fn draw_rect(&mut self, pos: Vec2, size: Vec2, _color: [f32; 4]) {
            self.calls.push(Call::Rect(pos, size));
        }
        fn draw_circle(&mut self, center: Vec2, radius: f32, _color: [f32; 4]) {
            self.calls.push(Call::Circle(center, radius));
        }
        fn draw_text(&mut self, text: &str, _pos: Vec2, _size_px: f32, _color: [f32; 4]) {
            self.calls.push(Call::Text(text.to_string()));
        }
    }

    #[test]
    fn test_start_prompt_frame() {
        let session = GameSession::new(GameConfig::default(), 1);
        let mut target = Recorder::default();
        draw_frame(&session, &mut target);
        assert_eq!(
            target.calls,
            vec![Call::Clear, Call::Text("Press Space to Start".to_string())]
        );
    }

    #[test]
    fn test_playing_frame_draws_entities_and_scores() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.phase = GamePhase::Running;
        session.scores = [3, 7];
        let mut target = Recorder::default();
        draw_frame(&session, &mut target);

        let rects = target.calls.iter().filter(|c| matches!(c, Call::Rect(..))).count();
        let circles = target.calls.iter().filter(|c| matches!(c, Call::Circle(..))).count();
        assert_eq!(rects, 2);
        assert_eq!(circles, 1);
        assert!(target.calls.contains(&Call::Text("3".to_string())));
        assert!(target.calls.contains(&Call::Text("7".to_string())));
    }

    #[test]
    fn test_game_over_frame_names_winner() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.phase = GamePhase::Over(Side::Right);
        let mut target = Recorder::default();
        draw_frame(&session, &mut target);
        assert!(target.calls.contains(&Call::Text("Player 2 wins!".to_string())));
        assert!(
            target
                .calls
                .contains(&Call::Text("Press Space to Play Again".to_string()))
        );
    }

    #[test]
    fn test_display_mode_mapping() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        assert_eq!(display_mode(&session), DisplayMode::StartPrompt);
        session.phase = GamePhase::Paused;
        assert_eq!(display_mode(&session), DisplayMode::PausedOverlay);
    }
}
