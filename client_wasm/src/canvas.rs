//! Canvas 2D drawing target

use game_core::{DrawTarget, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

/// Measure the canvas' on-page size once and match the backing store to it
pub fn measure_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = (rect.width(), rect.height());
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width as f32, height as f32)
}

impl DrawTarget for CanvasTarget {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            web_sys::console::warn_2(&JsValue::from_str("arc failed:"), &err);
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }
}
