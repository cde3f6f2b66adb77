//! Brick grid layout
//!
//! Rows are horizontally centered on the canvas. With `n` columns the row is
//! `n * (w + gap) - gap` wide and starts at half the leftover canvas width.

use glam::Vec2;

use super::state::{Brick, BrickGrid};
use crate::config::GridConfig;

/// Build a full grid of visible bricks.
///
/// Pure and deterministic. The config is trusted here; a row wider than the
/// canvas simply overflows both edges.
pub fn build_grid(config: &GridConfig, canvas_width: f32) -> BrickGrid {
    let left = (canvas_width - config.total_row_width()) / 2.0;
    let step = Vec2::new(
        config.brick_width + config.gap,
        config.brick_height + config.gap,
    );

    let mut bricks = Vec::with_capacity(config.brick_count());
    for row in 0..config.rows {
        for column in 0..config.columns {
            bricks.push(Brick {
                pos: Vec2::new(
                    left + column as f32 * step.x,
                    config.offset_y + row as f32 * step.y,
                ),
                visible: true,
            });
        }
    }

    log::debug!(
        "Built {}x{} brick grid, left offset {}",
        config.rows,
        config.columns,
        left
    );

    BrickGrid {
        rows: config.rows,
        columns: config.columns,
        brick_size: Vec2::new(config.brick_width, config.brick_height),
        bricks,
    }
}
