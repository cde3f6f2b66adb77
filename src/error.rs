//! Configuration errors
//!
//! The simulation itself never fails; only building a session from a bad
//! configuration does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("brick grid needs at least one {0}")]
    EmptyGrid(&'static str),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("starting lives must be at least 1")]
    NoLives,

    #[error("paddle width {paddle_width} does not fit canvas width {canvas_width}")]
    PaddleTooWide { paddle_width: f32, canvas_width: f32 },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
