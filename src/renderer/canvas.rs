//! Canvas 2D painter

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use super::scene::{PreviewLayer, Scene};
use crate::consts::*;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the viewport
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn draw_preview(&self, layer: &PreviewLayer) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let aim = &layer.aim;

        // Dashed trajectory
        ctx.save();
        ctx.set_stroke_style_str(&layer.color);
        let dash = js_sys::Array::of2(
            &JsValue::from_f64(PREVIEW_DASH as f64),
            &JsValue::from_f64(PREVIEW_DASH as f64),
        );
        ctx.set_line_dash(&dash)?;
        ctx.set_line_width(PREVIEW_LINE_WIDTH as f64);
        ctx.begin_path();
        for seg in &aim.path {
            ctx.move_to(seg.from.x as f64, seg.from.y as f64);
            ctx.line_to(seg.to.x as f64, seg.to.y as f64);
        }
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;
        ctx.restore();

        // Arrow
        ctx.save();
        ctx.set_stroke_style_str(&layer.color);
        ctx.set_fill_style_str(&layer.color);
        ctx.set_line_width(ARROW_LINE_WIDTH as f64);
        ctx.begin_path();
        ctx.move_to(aim.shaft.from.x as f64, aim.shaft.from.y as f64);
        ctx.line_to(aim.shaft.to.x as f64, aim.shaft.to.y as f64);
        ctx.stroke();

        let [tip, a, b] = aim.head;
        ctx.begin_path();
        ctx.move_to(tip.x as f64, tip.y as f64);
        ctx.line_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.close_path();
        ctx.fill();
        ctx.restore();
        Ok(())
    }

    fn draw(&self, scene: &Scene) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(&scene.background);
        ctx.fill_rect(0.0, 0.0, scene.width as f64, scene.height as f64);

        if let Some(layer) = &scene.preview {
            self.draw_preview(layer)?;
        }

        ctx.begin_path();
        ctx.arc(
            scene.ball.center.x as f64,
            scene.ball.center.y as f64,
            scene.ball.radius as f64,
            0.0,
            TAU,
        )?;
        ctx.set_fill_style_str(&scene.ball.color);
        ctx.fill();

        ctx.set_fill_style_str(&scene.wall_color);
        for r in &scene.walls {
            ctx.fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn present(&mut self, scene: &Scene) {
        if let Err(e) = self.draw(scene) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
