//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameState`]; update functions take it
//! by `&mut` and nothing is shared between sessions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::build_grid;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch input
    Serve,
    /// Ball in flight
    Playing,
    /// Every brick destroyed
    Won,
    /// Lives exhausted
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Terminal state as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    None,
    Win,
    Lose,
}

/// Something that happened during a tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BrickDestroyed { row: usize, column: usize },
    LifeLost { lives_left: u8 },
    Won { score: u64 },
    Lost { score: u64 },
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity (pixels/frame)
    pub dx: f32,
    /// Velocity magnitude applied while steering
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered horizontally at its configured height
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.canvas_width / 2.0 - config.paddle.width / 2.0,
                config.paddle_y(),
            ),
            width: config.paddle.width,
            height: config.paddle.height,
            dx: 0.0,
            speed: config.paddle.speed,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Advance by the current velocity, keeping the paddle on the canvas
    pub fn advance(&mut self, canvas_width: f32) {
        let max_x = (canvas_width - self.width).max(0.0);
        self.pos.x = (self.pos.x + self.dx).clamp(0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Velocity (pixels/frame)
    pub vel: Vec2,
    pub radius: f32,
    /// False while the ball rides the paddle
    pub moving: bool,
}

impl Ball {
    /// A ball resting on the paddle with the serve velocity loaded
    pub fn new(config: &GameConfig, paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: config.ball.launch_velocity,
            radius: config.ball.radius,
            moving: false,
        };
        ball.rest_on(paddle);
        ball
    }

    /// Sit the ball on top of the paddle center
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
    }

    /// Put the ball back on the paddle, ready to be launched again
    pub fn serve(&mut self, paddle: &Paddle, launch_velocity: Vec2) {
        self.moving = false;
        self.vel = launch_velocity;
        self.rest_on(paddle);
    }

    /// Release the ball. Returns false if it was already in flight.
    pub fn launch(&mut self) -> bool {
        if self.moving {
            return false;
        }
        self.moving = true;
        true
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A single brick. Size is shared grid-wide, see [`BrickGrid::brick_size`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, fixed at build time
    pub pos: Vec2,
    pub visible: bool,
}

/// Bricks laid out rows x columns, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) brick_size: Vec2,
    pub(crate) bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width and height of every brick
    pub fn brick_size(&self) -> Vec2 {
        self.brick_size
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get(row * self.columns + column)
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get_mut(row * self.columns + column)
    }

    /// Bricks in one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Brick]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        self.bricks.get(start..start + self.columns)
    }

    /// All bricks with their (row, column), row-major
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        let columns = self.columns;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| (i / columns, i % columns, b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        let columns = self.columns;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| (i / columns, i % columns, b))
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// True once no brick is left standing
    pub fn all_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.visible)
    }
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub lives: u8,
    pub score: u64,
    pub terminal: Terminal,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the session was built from
    pub config: GameConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation frame counter
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl GameState {
    /// Create a new session from a validated config
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&config, &paddle);
        let bricks = build_grid(&config.grid, config.canvas_width);
        let lives = config.starting_lives;

        Self {
            config,
            paddle,
            ball,
            bricks,
            lives,
            score: 0,
            phase: GamePhase::Serve,
            frame: 0,
        }
    }

    /// Start over: fresh grid, full lives, zero score, ball on a centered paddle
    pub fn reset(&mut self) {
        let config = std::mem::take(&mut self.config);
        *self = Self::build(config);
        log::info!(
            "Session reset: {} bricks, {} lives",
            self.bricks.len(),
            self.lives
        );
    }

    pub fn terminal_state(&self) -> Terminal {
        match self.phase {
            GamePhase::Won => Terminal::Win,
            GamePhase::Lost => Terminal::Lose,
            GamePhase::Serve | GamePhase::Playing => Terminal::None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            paddle: self.paddle.clone(),
            ball: self.ball.clone(),
            bricks: self.bricks.clone(),
            lives: self.lives,
            score: self.score,
            terminal: self.terminal_state(),
        }
    }
}
