//! Week grid layout engine.
//!
//! Pure computations that turn a schedule into pixel rectangles on the
//! 7-column by 24-hour grid. Nothing in here touches a rendering surface;
//! the egui views consume the results.

mod geometry;
mod grid_lines;
mod schedule;
mod segmenter;
mod variant;

pub use geometry::{compute_geometry, GridGeometry, DAY_COLUMNS, ROW_DIVISOR};
pub use grid_lines::{
    plan_grid_lines, GridLine, LineOrientation, DAY_SEPARATOR_STROKE, HOUR_STROKE,
    QUARTER_DAY_STROKE,
};
pub use schedule::{layout_schedule, PlacedSegment, SkippedEvent, WeekLayout};
pub use segmenter::{segment, segment_week, LayoutError, PixelRect, SegmentRect};
pub use variant::{select_variant, Variant};
