//! Rendering: repaints the whole surface with rotated copies of the text.
//!
//! This module reads a [`WatermarkState`] snapshot and produces draw calls on a
//! [`Surface`]. It never mutates state. Every call repaints the full surface;
//! given the same state and size it issues the same calls.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::BASELINE_DIVISOR;
use crate::state::WatermarkState;
use crate::surface::Surface;
use crate::tiles::{Point, Tile, TileGrid};

/// What a call to [`draw`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Tiles drawn.
    pub tiles: usize,
    /// State generation the frame reflects.
    pub generation: u64,
}

/// Clear the surface and tile it with the watermark text.
///
/// `width` and `height` are the surface size in CSS pixels.
///
/// # Errors
///
/// Returns the surface's error if any draw call fails. The transform stack is
/// balanced even on error.
pub fn draw<S: Surface>(
    surface: &mut S,
    state: &WatermarkState,
    width: f64,
    height: f64,
) -> Result<RenderStats, S::Error> {
    let mut stats = RenderStats { tiles: 0, generation: state.generation() };

    surface.begin_frame(width, height)?;
    surface.set_antialiasing(true);

    let text = state.text();
    if text.is_empty() {
        return Ok(stats);
    }

    surface.set_font(&state.font().to_css());
    surface.set_fill_style(&state.color().to_css());

    // Same surface, same font: steps match the drawn glyphs.
    let metrics = surface.measure_text(text)?;
    let Some(grid) = TileGrid::plan(metrics, f64::from(state.spacing_px()), width, height) else {
        tracing::debug!(?metrics, spacing = state.spacing_px(), "degenerate tile step; nothing drawn");
        return Ok(stats);
    };

    let radians = f64::from(state.angle_degrees()).to_radians();
    let anchor = Point::new(-metrics.width / 2.0, metrics.height / BASELINE_DIVISOR);

    for tile in grid.tiles() {
        surface.save();
        let drawn = draw_tile(surface, text, tile, radians, anchor);
        surface.restore();
        drawn?;
        stats.tiles += 1;
    }

    tracing::debug!(tiles = stats.tiles, generation = stats.generation, width, height, "watermark rendered");
    Ok(stats)
}

fn draw_tile<S: Surface>(surface: &mut S, text: &str, tile: Tile, radians: f64, anchor: Point) -> Result<(), S::Error> {
    surface.translate(tile.center.x, tile.center.y)?;
    surface.rotate(radians)?;
    surface.fill_text(text, anchor.x, anchor.y)
}
