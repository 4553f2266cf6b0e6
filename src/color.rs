//! Color values and the opacity-to-alpha rule.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use crate::consts::MAX_ALPHA;

/// An opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// Alpha digits are accepted but dropped: transparency comes from opacity.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self { r, g, b })
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGB plus an alpha channel in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Combine an RGB triple with the alpha derived from `opacity`.
    #[must_use]
    pub fn with_opacity(rgb: Rgb, opacity: f64) -> Self {
        Self { r: rgb.r, g: rgb.g, b: rgb.b, a: alpha_for_opacity(opacity) }
    }

    #[must_use]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string for a 2D context fill style.
    #[must_use]
    pub fn to_css(self) -> String {
        let alpha = f64::from(self.a) / f64::from(MAX_ALPHA);
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Alpha channel for an opacity in `[0, 1]`, rounding half up.
///
/// Inputs outside the range saturate; callers validate first.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn alpha_for_opacity(opacity: f64) -> u8 {
    let scaled = (opacity.clamp(0.0, 1.0) * f64::from(MAX_ALPHA) + 0.5).floor();
    scaled as u8
}
