//! Grid line placement.
//!
//! Lines are planned here as plain data and drawn by the egui grid renderer,
//! so the placement rules can be checked without a painter.

use super::geometry::GridGeometry;

/// Stroke width of an ordinary hour line
pub const HOUR_STROKE: f32 = 2.0;
/// Stroke width of every 4th hour line
pub const QUARTER_DAY_STROKE: f32 = 4.0;
/// Stroke width of the vertical day separators
pub const DAY_SEPARATOR_STROKE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: LineOrientation,
    /// Distance from the top edge (horizontal) or left edge (vertical)
    pub offset: u32,
    pub thickness: f32,
}

impl GridLine {
    /// Start and end points, spanning the full surface
    pub fn endpoints(&self, geometry: &GridGeometry) -> [(u32, u32); 2] {
        match self.orientation {
            LineOrientation::Horizontal => [(0, self.offset), (geometry.width, self.offset)],
            LineOrientation::Vertical => [(self.offset, 0), (self.offset, geometry.height)],
        }
    }

    pub fn is_thick(&self) -> bool {
        self.thickness >= QUARTER_DAY_STROKE
    }
}

/// Hour lines every `row_height` from the first row boundary up to (not
/// including) the bottom edge, then day separators every `column_width` up
/// to the right edge. A collapsed row or column size produces no lines.
pub fn plan_grid_lines(geometry: &GridGeometry) -> Vec<GridLine> {
    let mut lines = Vec::new();

    if geometry.row_height > 0 {
        let quarter_day = geometry.row_height * 4;
        for offset in (geometry.row_height..geometry.height).step_by(geometry.row_height as usize) {
            let thickness = if offset % quarter_day == 0 {
                QUARTER_DAY_STROKE
            } else {
                HOUR_STROKE
            };
            lines.push(GridLine {
                orientation: LineOrientation::Horizontal,
                offset,
                thickness,
            });
        }
    }

    if geometry.column_width > 0 {
        for offset in (geometry.column_width..geometry.width).step_by(geometry.column_width as usize) {
            lines.push(GridLine {
                orientation: LineOrientation::Vertical,
                offset,
                thickness: DAY_SEPARATOR_STROKE,
            });
        }
    }

    lines
}
