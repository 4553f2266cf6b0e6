//! Font descriptor and its CSS shorthand codec.
//!
//! The descriptor is what the renderer hands to the surface (`ctx.font = ...`)
//! and what the settings store persists, so one string format serves both:
//! `[italic] [bold] <size>px <family>`.

#[cfg(test)]
#[path = "font_test.rs"]
mod font_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX, PX_PER_PT};
use crate::error::StateError;

bitflags::bitflags! {
    /// Style flags applied on top of the family and size.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

/// Family, size, and style for the watermark text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    family: String,
    size_px: f64,
    style: FontStyle,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self { family: DEFAULT_FONT_FAMILY.to_owned(), size_px: DEFAULT_FONT_SIZE_PX, style: FontStyle::empty() }
    }
}

impl FontDescriptor {
    /// Build a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidFont`] if the family is blank or the size is
    /// not a finite positive number.
    ///
    /// The family is stored the way [`FromStr`] reads it back: whitespace runs
    /// collapse to one space and matching outer quotes are removed.
    pub fn new(family: impl AsRef<str>, size_px: f64, style: FontStyle) -> Result<Self, StateError> {
        let family = normalize_family(family.as_ref());
        if family.is_empty() {
            return Err(StateError::InvalidFont("empty family".into()));
        }
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StateError::InvalidFont(format!("size {size_px} must be positive")));
        }
        Ok(Self { family, size_px, style })
    }

    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[must_use]
    pub fn size_px(&self) -> f64 {
        self.size_px
    }

    #[must_use]
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// CSS font shorthand, e.g. `italic bold 36px sans-serif`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if self.style.contains(FontStyle::ITALIC) {
            out.push_str("italic ");
        }
        if self.style.contains(FontStyle::BOLD) {
            out.push_str("bold ");
        }
        out.push_str(&format!("{}px ", self.size_px));
        if needs_quotes(&self.family) {
            out.push_str(&format!("\"{}\"", self.family));
        } else {
            out.push_str(&self.family);
        }
        out
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for FontDescriptor {
    type Err = StateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut style = FontStyle::empty();
        let mut tokens = raw.split_whitespace();

        let size_px = loop {
            let Some(token) = tokens.next() else {
                return Err(StateError::InvalidFont(format!("no size in {raw:?}")));
            };
            match token {
                "normal" => {}
                "italic" | "oblique" => style |= FontStyle::ITALIC,
                "bold" | "bolder" => style |= FontStyle::BOLD,
                _ => {
                    if let Ok(weight) = token.parse::<u16>() {
                        if weight >= 600 {
                            style |= FontStyle::BOLD;
                        }
                        continue;
                    }
                    break parse_size(token).ok_or_else(|| StateError::InvalidFont(format!("bad size {token:?}")))?;
                }
            }
        };

        let family = tokens.collect::<Vec<_>>().join(" ");
        Self::new(family, size_px, style)
    }
}

/// `36px`, `27pt`, or `36px/1.2` (line height ignored).
fn parse_size(token: &str) -> Option<f64> {
    let token = token.split('/').next()?;
    if let Some(px) = token.strip_suffix("px") {
        return px.parse().ok();
    }
    let pt = token.strip_suffix("pt")?.parse::<f64>().ok()?;
    Some(pt * PX_PER_PT)
}

fn needs_quotes(family: &str) -> bool {
    family.contains(char::is_whitespace) && !family.contains(',') && !family.starts_with(['"', '\''])
}

/// Collapse whitespace and peel matching outer quotes until neither changes.
fn normalize_family(raw: &str) -> String {
    let mut family = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    loop {
        let inner = unquote(&family);
        if inner.len() == family.len() {
            return family;
        }
        family = inner.split_whitespace().collect::<Vec<_>>().join(" ");
    }
}

fn unquote(family: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = family.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    family
}
