//! Defaults and shared numeric constants for the watermark crate.

// ── Defaults ────────────────────────────────────────────────────

/// Untranslated default watermark text.
pub const DEFAULT_TEXT: &str = "Sample Watermark";

/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Default font size in CSS pixels.
pub const DEFAULT_FONT_SIZE_PX: f64 = 36.0;

/// Default RGB channels (mid gray).
pub const DEFAULT_RGB: (u8, u8, u8) = (100, 100, 100);

/// Default rotation in degrees.
pub const DEFAULT_ANGLE_DEG: u16 = 30;

/// Default gap between tile bounding boxes, in pixels.
pub const DEFAULT_SPACING_PX: u32 = 200;

/// Default opacity.
pub const DEFAULT_OPACITY: f64 = 0.5;

/// Overlay stays above other windows unless the user turns it off.
pub const DEFAULT_STAY_ON_TOP: bool = true;

// ── Color ───────────────────────────────────────────────────────

/// Alpha channel value at full opacity.
pub const MAX_ALPHA: u8 = 255;

// ── Geometry ────────────────────────────────────────────────────

/// Full turn in degrees; angles are normalized into `[0, FULL_TURN_DEG)`.
pub const FULL_TURN_DEG: i64 = 360;

/// The baseline sits `text_height / BASELINE_DIVISOR` below the tile center so
/// the glyphs read as vertically centered.
pub const BASELINE_DIVISOR: f64 = 4.0;

/// Upper bound on tiles in one frame. A grid that would need more (a sub-pixel
/// font with no spacing) is not drawn.
pub const MAX_TILES: usize = 250_000;

/// Points to CSS pixels.
pub const PX_PER_PT: f64 = 4.0 / 3.0;
