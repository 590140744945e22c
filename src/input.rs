//! Keyboard input mapping
//!
//! Translates raw key-down/key-up events into paddle velocity intents and
//! one-shot commands. Key events may arrive at any time relative to the
//! frame callback; they only write intent fields, and the next tick reads
//! the latest values (at most one frame of input latency).

use crate::config::{GameConfig, KeyBindings};
use crate::sim::{GameSession, PaddleOwner, TickInput};

/// Maps key symbols onto session intents. Bindings are fixed at
/// construction from the configuration surface.
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: [KeyBindings; 2],
    pause_key: String,
    start_key: String,
    /// One-shot commands collected since the last frame
    pending: TickInput,
}

impl InputMapper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bindings: config.bindings.clone(),
            pause_key: config.pause_key.clone(),
            start_key: config.start_key.clone(),
            pending: TickInput::default(),
        }
    }

    /// Handle a key-down event. Direction keys set the matching human
    /// paddle's velocity intent; computer-owned paddles ignore their slot's
    /// bindings entirely. Pause and start are recorded as one-shots.
    pub fn key_down(&mut self, key: &str, session: &mut GameSession) {
        let speed = session.config.paddle_speed;
        for paddle in &mut session.paddles {
            let PaddleOwner::Human(slot) = paddle.owner else {
                continue;
            };
            let binding = &self.bindings[slot];
            if key == binding.up {
                paddle.dy = -speed;
            } else if key == binding.down {
                paddle.dy = speed;
            }
        }

        if key.eq_ignore_ascii_case(&self.pause_key) {
            self.pending.pause = true;
        }
        if key == self.start_key {
            self.pending.start = true;
        }
    }

    /// Handle a key-up event. A release only zeroes the paddle's velocity
    /// when it matches the direction the paddle is currently moving under,
    /// so releasing one key of a briefly-overlapping pair does not cancel
    /// the other.
    pub fn key_up(&mut self, key: &str, session: &mut GameSession) {
        for paddle in &mut session.paddles {
            let PaddleOwner::Human(slot) = paddle.owner else {
                continue;
            };
            let binding = &self.bindings[slot];
            if (key == binding.up && paddle.dy < 0.0)
                || (key == binding.down && paddle.dy > 0.0)
            {
                paddle.dy = 0.0;
            }
        }
    }

    /// Take the one-shot commands accumulated since the last frame,
    /// clearing them for the next.
    pub fn take_commands(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
