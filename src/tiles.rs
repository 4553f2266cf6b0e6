//! Tile grid geometry.
//!
//! Tiles advance by the un-rotated text box plus spacing on each axis. The
//! grid overscans one surface width to the left and right and starts one text
//! height above the top, running to twice the surface height, so that rotated
//! tiles still cover the corners.
//!
//! Origins are derived from their index (`start + i * step`) rather than by
//! accumulating a running float, so the grid is exact and reproducible.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use crate::consts::MAX_TILES;

/// A point in surface space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured size of the watermark text under the current font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// One positioned copy of the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Top-left of the un-rotated text box.
    pub origin: Point,
    /// Rotation pivot: the center of the un-rotated text box.
    pub center: Point,
}

/// A planned tile grid for one surface size and one text measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    metrics: TextMetrics,
    start: Point,
    step_x: f64,
    step_y: f64,
    columns: usize,
    rows: usize,
}

impl TileGrid {
    /// Plan the grid, or `None` if nothing should be drawn.
    ///
    /// Returns `None` when either step is not a positive finite number (for
    /// example empty text with zero spacing), when the surface has no area, or
    /// when the grid would exceed [`MAX_TILES`].
    #[must_use]
    pub fn plan(metrics: TextMetrics, spacing: f64, surface_width: f64, surface_height: f64) -> Option<Self> {
        let step_x = metrics.width + spacing;
        let step_y = metrics.height + spacing;
        if !(step_x.is_finite() && step_x > 0.0 && step_y.is_finite() && step_y > 0.0) {
            return None;
        }
        if !(surface_width.is_finite() && surface_width > 0.0 && surface_height.is_finite() && surface_height > 0.0) {
            return None;
        }

        // x in [-W, 2W), y in [-textHeight, 2H)
        let start = Point::new(-surface_width, -metrics.height);
        let columns = steps_to_cover(3.0 * surface_width, step_x)?;
        let rows = steps_to_cover(2.0 * surface_height + metrics.height, step_y)?;
        if columns.checked_mul(rows).is_none_or(|len| len > MAX_TILES) {
            tracing::warn!(columns, rows, max = MAX_TILES, "tile grid too dense; nothing drawn");
            return None;
        }

        Some(Self { metrics, start, step_x, step_y, columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn step(&self) -> (f64, f64) {
        (self.step_x, self.step_y)
    }

    /// Origin x of column `i`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn column_x(&self, i: usize) -> f64 {
        self.start.x + i as f64 * self.step_x
    }

    /// Origin y of row `j`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn row_y(&self, j: usize) -> f64 {
        self.start.y + j as f64 * self.step_y
    }

    /// All tiles, column by column (outer x, inner y).
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let half_w = self.metrics.width / 2.0;
        let half_h = self.metrics.height / 2.0;
        (0..self.columns).flat_map(move |i| {
            let x = self.column_x(i);
            (0..self.rows).map(move |j| {
                let y = self.row_y(j);
                Tile { origin: Point::new(x, y), center: Point::new(x + half_w, y + half_h) }
            })
        })
    }
}

/// `ceil(span / step)`, or `None` if the count does not fit in `usize`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn steps_to_cover(span: f64, step: f64) -> Option<usize> {
    let count = (span / step).ceil();
    if !count.is_finite() || count < 0.0 || count >= usize::MAX as f64 {
        return None;
    }
    Some(count as usize)
}
