//! Canvas 2D backend (WASM only)
//!
//! Paints a draw list onto a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCommand, Paint};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint one frame
    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        for command in commands {
            match command {
                DrawCommand::Clear { size, color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx
                        .fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCommand::RoundedRect {
                    pos,
                    size,
                    radius,
                    paint,
                } => {
                    self.rounded_rect_path(*pos, *size, *radius)?;
                    match paint {
                        Paint::Fill(color) => {
                            self.ctx.set_fill_style_str(color);
                            self.ctx.fill();
                        }
                        Paint::Stroke(color) => {
                            self.ctx.set_stroke_style_str(color);
                            self.ctx.stroke();
                        }
                    }
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.begin_path();
                    self.ctx
                        .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill();
                    self.ctx.close_path();
                }
                DrawCommand::Text {
                    text,
                    pos,
                    font,
                    color,
                } => {
                    self.ctx.set_font(font);
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }

    /// Trace a rounded rectangle as the current path
    fn rounded_rect_path(&self, pos: Vec2, size: Vec2, radius: f32) -> Result<(), JsValue> {
        let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0) as f64;
        let (x, y) = (pos.x as f64, pos.y as f64);
        let (w, h) = (size.x as f64, size.y as f64);

        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        self.ctx.arc_to(x + w, y, x + w, y + h, r)?;
        self.ctx.arc_to(x + w, y + h, x, y + h, r)?;
        self.ctx.arc_to(x, y + h, x, y, r)?;
        self.ctx.arc_to(x, y, x + w, y, r)?;
        self.ctx.close_path();
        Ok(())
    }
}
