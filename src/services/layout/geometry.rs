//! Pixel offsets of day columns and hour rows for a given surface size.

use crate::models::day::Day;

/// Number of day columns, Sunday through Saturday
pub const DAY_COLUMNS: u32 = 7;

/// Row height divisor. 23 rather than 24: the last hour boundary lands on
/// the bottom edge of the surface, and grid lines and event rows both rely on it.
pub const ROW_DIVISOR: u32 = 23;

/// Column and row sizes derived from the current surface size.
///
/// Recomputed on every layout pass; never cached across resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridGeometry {
    pub width: u32,
    pub height: u32,
    pub column_width: u32,
    pub row_height: u32,
}

impl GridGeometry {
    pub fn compute(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            column_width: width / DAY_COLUMNS,
            row_height: height / ROW_DIVISOR,
        }
    }

    /// Geometry for a floating point surface such as an egui rect.
    /// Fractional pixels are dropped; negative or NaN sizes become zero.
    pub fn from_surface(width: f32, height: f32) -> Self {
        Self::compute(width.max(0.0) as u32, height.max(0.0) as u32)
    }

    /// Left edge of the column for `day`
    pub fn column_x(&self, day: Day) -> u32 {
        day.index() as u32 * self.column_width
    }

    /// Vertical offset of an `hhmm` time. Minutes are discarded.
    pub fn hour_y(&self, time: u32) -> u32 {
        (time / 100).saturating_mul(self.row_height)
    }

    /// True when rows or columns collapsed to zero pixels
    pub fn is_degenerate(&self) -> bool {
        self.column_width == 0 || self.row_height == 0
    }
}

pub fn compute_geometry(width: u32, height: u32) -> GridGeometry {
    GridGeometry::compute(width, height)
}
