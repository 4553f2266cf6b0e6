//! Drawing backend used by the renderer.
//!
//! The trait mirrors the subset of a 2D canvas context the watermark needs.
//! Measurement and drawing go through the same object so that tile steps are
//! computed with the metrics the glyphs are actually drawn with.

use crate::tiles::TextMetrics;

/// A 2D drawing target with a save/restore transform stack.
pub trait Surface {
    type Error;

    /// Reset the transform and clear `width` x `height` (CSS pixels) to transparent.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn begin_frame(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Antialiasing / smoothing hint. Quality only.
    fn set_antialiasing(&mut self, enabled: bool);

    /// Set the font from a CSS shorthand string.
    fn set_font(&mut self, css: &str);

    /// Set the fill style from a CSS color string.
    fn set_fill_style(&mut self, css: &str);

    /// Measure `text` under the current font.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, Self::Error>;

    /// Push the current transform and style.
    fn save(&mut self);

    /// Pop the transform and style pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    /// # Errors
    ///
    /// Backend-specific.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Rotate clockwise by `radians` about the current origin.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn rotate(&mut self, radians: f64) -> Result<(), Self::Error>;

    /// Fill `text` with its alphabetic baseline starting at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}
