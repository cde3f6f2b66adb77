//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, velocities in pixels per frame
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{
    WallHit, ball_missed, ball_overlaps_rect, brick_collision, paddle_collision, wall_collision,
};
pub use grid::build_grid;
pub use state::{
    Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle, Snapshot, Terminal,
};
pub use tick::{Steer, TickInput, evaluate, move_ball, move_paddle, tick};
