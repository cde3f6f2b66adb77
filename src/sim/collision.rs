//! Collision detection and response
//!
//! The ball is a circle, paddle and bricks are axis-aligned rectangles. Every
//! response is a sign flip on one velocity axis; speed never changes.

use glam::Vec2;

use super::state::{Ball, BrickGrid, Paddle};

/// Which walls the ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left or right edge
    pub side: bool,
    pub top: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Circle vs rectangle overlap, using the circle's bounding box.
///
/// `min` is the rectangle's top-left corner. Touching edges do not count.
#[inline]
pub fn ball_overlaps_rect(center: Vec2, radius: f32, min: Vec2, size: Vec2) -> bool {
    center.x + radius > min.x
        && center.x - radius < min.x + size.x
        && center.y + radius > min.y
        && center.y - radius < min.y + size.y
}

/// Bounce off the left, right and top canvas edges.
///
/// The bottom edge is a miss, see [`ball_missed`].
pub fn wall_collision(ball: &mut Ball, canvas_width: f32) -> WallHit {
    let hit = WallHit {
        side: ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > canvas_width,
        top: ball.top() < 0.0,
    };
    if hit.side {
        ball.vel.x = -ball.vel.x;
    }
    if hit.top {
        ball.vel.y = -ball.vel.y;
    }
    hit
}

/// Bounce off the paddle.
///
/// Fires whenever the ball center is strictly inside the paddle's horizontal
/// span and the ball's bottom is below the paddle top. Direction of travel is
/// not checked, so a ball embedded in the paddle flips again next frame.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let hit = ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.right()
        && ball.bottom() > paddle.pos.y;
    if hit {
        ball.vel.y = -ball.vel.y;
    }
    hit
}

/// Break every visible brick the ball overlaps.
///
/// Each hit flips `dy` on its own, so an even number of hits in one frame
/// leaves `dy` unchanged. Returns `(row, column)` of the bricks destroyed,
/// row-major.
pub fn brick_collision(ball: &mut Ball, grid: &mut BrickGrid) -> Vec<(usize, usize)> {
    let size = grid.brick_size();
    let mut hits = Vec::new();

    for (row, column, brick) in grid.iter_mut() {
        if !brick.visible {
            continue;
        }
        if ball_overlaps_rect(ball.pos, ball.radius, brick.pos, size) {
            ball.vel.y = -ball.vel.y;
            brick.visible = false;
            hits.push((row, column));
        }
    }

    hits
}

/// Check if the ball dropped past the bottom edge
#[inline]
pub fn ball_missed(ball: &Ball, canvas_height: f32) -> bool {
    ball.bottom() > canvas_height
}
