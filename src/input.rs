//! Keyboard input
//!
//! Arrow keys steer the paddle, space launches the ball. Releasing either
//! arrow stops the paddle, even if the other arrow is still held. Once the
//! session ends the handler goes deaf until it is re-enabled on restart.

use crate::sim::{Steer, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Launch,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Launch),
            _ => None,
        }
    }
}

/// Accumulates key events between frames
#[derive(Debug, Clone)]
pub struct InputState {
    steer: Steer,
    /// Launch pressed since the last frame
    launch: bool,
    enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            steer: Steer::Idle,
            launch: false,
            enabled: true,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if !self.enabled {
            return;
        }
        match key {
            Key::Left => self.steer = Steer::Left,
            Key::Right => self.steer = Steer::Right,
            Key::Launch => self.launch = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if !self.enabled {
            return;
        }
        if matches!(key, Key::Left | Key::Right) {
            self.steer = Steer::Idle;
        }
    }

    /// Input for the next tick. Launch is one-shot and cleared here.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            steer: self.steer,
            launch: std::mem::take(&mut self.launch),
        }
    }

    /// Drop held keys and ignore everything until [`InputState::enable`]
    pub fn disable(&mut self) {
        self.steer = Steer::Idle;
        self.launch = false;
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
