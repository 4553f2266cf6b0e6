//! [`Surface`] over a browser 2D canvas context.
//!
//! This is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors as `JsValue`.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;
use watermark::Surface;
use watermark::tiles::TextMetrics;

/// A canvas context plus the device pixel ratio its backing store uses.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    dpr: f64,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, dpr: f64) -> Self {
        Self { ctx, dpr }
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn begin_frame(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        // Draw in CSS pixels regardless of backing-store resolution.
        self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("alphabetic");
        Ok(())
    }

    fn set_antialiasing(&mut self, enabled: bool) {
        self.ctx.set_image_smoothing_enabled(enabled);
    }

    fn set_font(&mut self, css: &str) {
        self.ctx.set_font(css);
    }

    fn set_fill_style(&mut self, css: &str) {
        self.ctx.set_fill_style_str(css);
    }

    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, JsValue> {
        let metrics = self.ctx.measure_text(text)?;
        Ok(TextMetrics {
            width: metrics.width(),
            // Line height of the font, not of these particular glyphs.
            height: metrics.font_bounding_box_ascent() + metrics.font_bounding_box_descent(),
        })
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.translate(x, y)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), JsValue> {
        self.ctx.rotate(radians)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.fill_text(text, x, y)
    }
}
