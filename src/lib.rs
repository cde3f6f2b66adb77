//! Brick Breaker - A single-screen paddle and brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, win/lose)
//! - `input`: Key events to paddle velocity and launch commands
//! - `game`: Explicit frame loop driver around the simulation
//! - `renderer`: Scene building from snapshots, canvas backend on web
//! - `autopilot`: Seeded demo player
//! - `config`: Data-driven game configuration

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, GridConfig};
pub use error::ConfigError;
pub use game::Game;

/// Game configuration defaults
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Paddle defaults - sits 20px above the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 20.0;
    /// Pixels per frame while an arrow key is held
    pub const PADDLE_SPEED: f32 = 3.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Velocity given to a freshly served ball (pixels per frame)
    pub const BALL_LAUNCH_DX: f32 = 2.0;
    pub const BALL_LAUNCH_DY: f32 = -2.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 15.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_BRICK: u64 = 10;

    /// Corner radius for rounded paddle/brick outlines
    pub const CORNER_RADIUS: f32 = 8.0;
}
