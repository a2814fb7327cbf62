//! Thin wrapper over the canvas 2D context
//!
//! Owns the context for the whole session and exposes the handful of
//! primitives the scenes need. Colors are CSS color strings; `glow` maps to
//! the canvas shadow blur for the neon look.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Surface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl Surface {
    /// Acquire the 2D context. None when the canvas cannot provide one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
        })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    fn set_glow(&self, color: &str, glow: f32) {
        self.ctx.set_shadow_blur(glow as f64);
        self.ctx.set_shadow_color(color);
    }

    /// Fill the whole viewport; also used for translucent overlays and the
    /// motion-blur backgrounds
    pub fn clear(&self, color: &str) {
        self.set_glow(color, 0.0);
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    pub fn fill_rect(&self, pos: Vec2, size: Vec2, color: &str, glow: f32) {
        self.set_glow(color, glow);
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    pub fn stroke_rect(&self, pos: Vec2, size: Vec2, color: &str, line_width: f32, glow: f32) {
        self.set_glow(color, glow);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    pub fn fill_circle(&self, center: Vec2, radius: f32, color: &str, glow: f32) {
        self.set_glow(color, glow);
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    pub fn stroke_circle(&self, center: Vec2, radius: f32, color: &str, line_width: f32, glow: f32) {
        if radius <= 0.0 {
            return;
        }
        self.set_glow(color, glow);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
    }

    /// Stroked closed path through three points (the drift ship)
    pub fn stroke_triangle(&self, a: Vec2, b: Vec2, c: Vec2, color: &str, line_width: f32, glow: f32) {
        self.set_glow(color, glow);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.stroke();
    }

    pub fn line(&self, from: Vec2, to: Vec2, color: &str, line_width: f32) {
        self.set_glow(color, 0.0);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    pub fn text(&self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.set_glow(color, 0.0);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("left");
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    pub fn text_centered(&self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.set_glow(color, 0.0);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
