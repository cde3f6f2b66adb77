//! Frame loop driver
//!
//! Wraps a [`GameState`] with keyboard input and a running flag. Callers own
//! the loop itself:
//!
//! ```no_run
//! # use brick_breaker::Game;
//! let mut game = Game::default();
//! while game.is_running() {
//!     game.frame();
//!     // render(game.snapshot()); wait for the next tick
//! #   break;
//! }
//! ```
//!
//! Both terminal states clear the running flag and mute input.

use serde::Serialize;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::input::{InputState, Key};
use crate::sim::{GameEvent, GameState, Snapshot, Terminal, TickInput, tick};

/// Outcome of a driven run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub terminal: Terminal,
    pub score: u64,
    pub lives: u8,
    pub bricks_left: usize,
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: InputState,
    running: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_state(GameState::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(config)?))
    }

    fn from_state(state: GameState) -> Self {
        log::info!(
            "New session: {} bricks, {} lives",
            state.bricks.len(),
            state.lives
        );
        Self {
            state,
            input: InputState::new(),
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// False once the session reached a terminal state
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn terminal_state(&self) -> Terminal {
        self.state.terminal_state()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Advance one frame using the keyboard state
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let input = self.input.take_tick_input();
        self.step(&input)
    }

    /// Advance one frame with explicit input
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }

        let events = tick(&mut self.state, input);

        if self.state.is_terminal() {
            self.running = false;
            self.input.disable();
            log::info!(
                "Session ended ({:?}) after {} frames",
                self.state.terminal_state(),
                self.state.frame
            );
        }
        events
    }

    /// Throw the session away and start over with the same config
    pub fn restart(&mut self) {
        self.state.reset();
        self.input = InputState::new();
        self.running = true;
    }

    /// Drive the session until it ends or `max_frames` have been stepped
    pub fn run<F>(&mut self, mut driver: F, max_frames: u64) -> RunSummary
    where
        F: FnMut(&GameState) -> TickInput,
    {
        let mut frames = 0;
        while self.running && frames < max_frames {
            let input = driver(&self.state);
            self.step(&input);
            frames += 1;
        }

        RunSummary {
            frames,
            terminal: self.state.terminal_state(),
            score: self.state.score,
            lives: self.state.lives,
            bricks_left: self.state.bricks.visible_count(),
        }
    }
}
