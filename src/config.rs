//! Game configuration
//!
//! Every tunable of a session lives here. Partial JSON is accepted: missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Paddle geometry and movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Distance from the paddle's top edge to the canvas bottom
    pub bottom_margin: f32,
    /// Horizontal speed while a direction key is held (pixels/frame)
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            bottom_margin: PADDLE_BOTTOM_MARGIN,
            speed: PADDLE_SPEED,
        }
    }
}

/// Ball size and serve velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Velocity assigned whenever the ball is (re)served
    pub launch_velocity: Vec2,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            launch_velocity: Vec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY),
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Spacing between neighbouring bricks, both axes
    pub gap: f32,
    /// Top edge of the first row
    pub offset_y: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            gap: BRICK_GAP,
            offset_y: BRICK_OFFSET_Y,
        }
    }
}

impl GridConfig {
    /// Width of one full row, first brick's left edge to last brick's right edge
    pub fn total_row_width(&self) -> f32 {
        self.columns as f32 * (self.brick_width + self.gap) - self.gap
    }

    pub fn brick_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub grid: GridConfig,
    pub starting_lives: u8,
    pub points_per_brick: u64,
    /// Corner radius used when drawing paddle and bricks
    pub corner_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            grid: GridConfig::default(),
            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
            corner_radius: CORNER_RADIUS,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle.bottom_margin
    }

    /// Check the configuration before a session is built from it.
    ///
    /// A grid wider than the canvas is allowed; its bricks simply overflow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 {
            return Err(ConfigError::EmptyGrid("row"));
        }
        if self.grid.columns == 0 {
            return Err(ConfigError::EmptyGrid("column"));
        }

        let dimensions = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("ball.radius", self.ball.radius),
            ("grid.brick_width", self.grid.brick_width),
            ("grid.brick_height", self.grid.brick_height),
        ];
        for (field, value) in dimensions {
            // Written so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.paddle.width > self.canvas_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle.width,
                canvas_width: self.canvas_width,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_y(), 480.0);
        assert_eq!(config.grid.brick_count(), 40);
        assert_eq!(config.grid.total_row_width(), 705.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_lives": 5, "grid": { "rows": 2 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.grid.rows, 2);
        assert_eq!(config.grid.columns, BRICK_COLUMNS);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let mut config = GameConfig::default();
        config.grid.columns = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid("column"))));

        config.grid.columns = 8;
        config.grid.rows = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid("row"))));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut config = GameConfig::default();
        config.ball.radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "ball.radius", .. })
        ));

        let mut config = GameConfig::default();
        config.paddle.width = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_lives_and_wide_paddle() {
        let mut config = GameConfig::default();
        config.starting_lives = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoLives)));

        let mut config = GameConfig::default();
        config.paddle.width = 900.0;
        assert!(matches!(config.validate(), Err(ConfigError::PaddleTooWide { .. })));
    }

    #[test]
    fn test_overflowing_grid_is_allowed() {
        let mut config = GameConfig::default();
        config.grid.columns = 20;
        assert!(config.grid.total_row_width() > config.canvas_width);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_to_json_reloads_unchanged() {
        let mut config = GameConfig::default();
        config.points_per_brick = 25;
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    fn temp_config(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("brick_breaker_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_from_file_reads_overrides() {
        let path = temp_config("overrides");
        std::fs::write(&path, r#"{ "points_per_brick": 50, "paddle": { "speed": 6.0 } }"#)
            .unwrap();
        let config = GameConfig::from_file(&path);
        let _ = std::fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.points_per_brick, 50);
        assert_eq!(config.paddle.speed, 6.0);
        assert_eq!(config.paddle.width, PADDLE_WIDTH);
    }

    #[test]
    fn test_from_file_reports_missing_and_invalid() {
        let missing = std::env::temp_dir().join("brick_breaker_no_such_config.json");
        assert!(matches!(GameConfig::from_file(&missing), Err(ConfigError::Io(_))));

        let path = temp_config("no_lives");
        std::fs::write(&path, r#"{ "starting_lives": 0 }"#).unwrap();
        let result = GameConfig::from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::NoLives)));
    }
}
