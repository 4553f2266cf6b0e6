//! Watermark rendering parameters.
//!
//! DESIGN
//! ======
//! `WatermarkState` is owned by whoever owns the drawing surface and is passed
//! by reference to the renderer. Every setter validates before it writes, so a
//! rejected edit leaves the previous value in place. Opacity is the single
//! source of transparency: the stored color's alpha is recomputed from it on
//! every write and there is no way to set alpha directly.
//!
//! Each applied change bumps `generation`. Hosts compare it against the
//! generation they last rendered to decide whether a repaint is due.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::color::{Color, Rgb};
use crate::consts::{
    DEFAULT_ANGLE_DEG, DEFAULT_OPACITY, DEFAULT_RGB, DEFAULT_SPACING_PX, DEFAULT_TEXT, FULL_TURN_DEG,
};
use crate::error::StateError;
use crate::font::FontDescriptor;

/// Current watermark parameters.
///
/// Equality compares rendering parameters only; `generation` is bookkeeping.
#[derive(Debug, Clone)]
pub struct WatermarkState {
    text: String,
    font: FontDescriptor,
    color: Color,
    angle_degrees: u16,
    spacing_px: u32,
    opacity: f64,
    generation: u64,
}

impl Default for WatermarkState {
    fn default() -> Self {
        let (r, g, b) = DEFAULT_RGB;
        Self {
            text: DEFAULT_TEXT.to_owned(),
            font: FontDescriptor::default(),
            color: Color::with_opacity(Rgb::new(r, g, b), DEFAULT_OPACITY),
            angle_degrees: DEFAULT_ANGLE_DEG,
            spacing_px: DEFAULT_SPACING_PX,
            opacity: DEFAULT_OPACITY,
            generation: 0,
        }
    }
}

impl WatermarkState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Setters ---

    /// Replace the watermark text. Empty text is allowed and renders nothing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch("text");
    }

    /// Replace the font.
    ///
    /// Descriptors are validated at construction, so this cannot fail.
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.font = font;
        self.touch("font");
    }

    /// Replace the font from a CSS shorthand string.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidFont`] and keeps the current font if `css`
    /// does not parse.
    pub fn set_font_css(&mut self, css: &str) -> Result<(), StateError> {
        match css.parse::<FontDescriptor>() {
            Ok(font) => {
                self.set_font(font);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(css, error = %err, current = %self.font, "keeping previous font");
                Err(err)
            }
        }
    }

    /// Replace the RGB channels. Alpha still follows opacity.
    pub fn set_color(&mut self, rgb: Rgb) {
        self.color = Color::with_opacity(rgb, self.opacity);
        self.touch("color");
    }

    /// Replace the RGB channels from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidColor`] if `hex` does not parse.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), StateError> {
        let rgb = Rgb::parse_hex(hex).ok_or_else(|| StateError::InvalidColor(hex.to_owned()))?;
        self.set_color(rgb);
        Ok(())
    }

    /// Set the rotation, normalized into `[0, 359]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_angle(&mut self, degrees: i64) {
        self.angle_degrees = degrees.rem_euclid(FULL_TURN_DEG) as u16;
        self.touch("angle");
    }

    /// Set the gap between tile bounding boxes.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NegativeSpacing`] for negative input; values
    /// above `u32::MAX` saturate.
    pub fn set_spacing(&mut self, px: i64) -> Result<(), StateError> {
        if px < 0 {
            return Err(StateError::NegativeSpacing(px));
        }
        self.spacing_px = u32::try_from(px).unwrap_or(u32::MAX);
        self.touch("spacing");
        Ok(())
    }

    /// Set opacity and re-derive the color's alpha from it.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OpacityOutOfRange`] for NaN or values outside
    /// `[0, 1]`. Out-of-range input is rejected, never clamped.
    pub fn set_opacity(&mut self, opacity: f64) -> Result<(), StateError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(StateError::OpacityOutOfRange(opacity));
        }
        self.opacity = opacity;
        self.color = Color::with_opacity(self.color.rgb(), opacity);
        self.touch("opacity");
        Ok(())
    }

    fn touch(&mut self, field: &'static str) {
        self.generation += 1;
        tracing::debug!(field, generation = self.generation, "watermark state changed");
    }

    // --- Getters ---

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn angle_degrees(&self) -> u16 {
        self.angle_degrees
    }

    #[must_use]
    pub fn spacing_px(&self) -> u32 {
        self.spacing_px
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Number of changes applied since construction.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl PartialEq for WatermarkState {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.font == other.font
            && self.color == other.color
            && self.angle_degrees == other.angle_degrees
            && self.spacing_px == other.spacing_px
            && self.opacity.to_bits() == other.opacity.to_bits()
    }
}
