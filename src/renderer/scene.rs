//! Scene building
//!
//! Turns a simulation [`Snapshot`] into an ordered list of 2D draw commands.
//! Pure, so it runs in tests without a display.

use glam::Vec2;

use crate::config::GameConfig;
use crate::sim::{Snapshot, Terminal};

/// Colors for game elements (CSS)
pub mod colors {
    pub const BACKGROUND: &str = "#fff";
    pub const PADDLE: &str = "#000";
    pub const BALL: &str = "#000";
    pub const BRICK_OUTLINE: &str = "#000";
    pub const HUD_TEXT: &str = "#000";
}

pub const HUD_FONT: &str = "16px 'Space Grotesk', serif";

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(&'static str),
    Stroke(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear { size: Vec2, color: &'static str },
    RoundedRect {
        pos: Vec2,
        size: Vec2,
        radius: f32,
        paint: Paint,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    /// Text anchored at its baseline-left corner
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: &'static str,
    },
}

/// Build the draw list for one frame: background, bricks, paddle, ball, HUD
pub fn build_scene(snapshot: &Snapshot, config: &GameConfig) -> Vec<DrawCommand> {
    let canvas = Vec2::new(config.canvas_width, config.canvas_height);
    let mut commands = Vec::with_capacity(snapshot.bricks.len() + 5);

    commands.push(DrawCommand::Clear {
        size: canvas,
        color: colors::BACKGROUND,
    });

    let brick_size = snapshot.bricks.brick_size();
    commands.extend(
        snapshot
            .bricks
            .iter()
            .filter(|(_, _, brick)| brick.visible)
            .map(|(_, _, brick)| DrawCommand::RoundedRect {
                pos: brick.pos,
                size: brick_size,
                radius: config.corner_radius,
                paint: Paint::Stroke(colors::BRICK_OUTLINE),
            }),
    );

    // A collapsed paddle or ball (after a loss) is not drawn
    let paddle = &snapshot.paddle;
    if paddle.width > 0.0 {
        commands.push(DrawCommand::RoundedRect {
            pos: paddle.pos,
            size: Vec2::new(paddle.width, paddle.height),
            radius: config.corner_radius,
            paint: Paint::Fill(colors::PADDLE),
        });
    }

    let ball = &snapshot.ball;
    if ball.radius > 0.0 {
        commands.push(DrawCommand::Circle {
            center: ball.pos,
            radius: ball.radius,
            color: colors::BALL,
        });
    }

    commands.push(DrawCommand::Text {
        text: format!("Lives: {}", snapshot.lives),
        pos: Vec2::new(canvas.x - 80.0, 20.0),
        font: HUD_FONT,
        color: colors::HUD_TEXT,
    });
    commands.push(DrawCommand::Text {
        text: format!("Score: {}", snapshot.score),
        pos: Vec2::new(10.0, 20.0),
        font: HUD_FONT,
        color: colors::HUD_TEXT,
    });

    commands
}

/// End-of-game banner, if the session is over
pub fn end_message(snapshot: &Snapshot) -> Option<String> {
    match snapshot.terminal {
        Terminal::None => None,
        Terminal::Win => Some(format!("You Win! Final Score: {}", snapshot.score)),
        Terminal::Lose => Some(format!("Game Over! Final Score: {}", snapshot.score)),
    }
}
