//! Splits an event into one rectangle per day column it touches.

use thiserror::Error;

use super::geometry::GridGeometry;
use crate::models::day::{Day, DAY_ORDER};
use crate::models::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The end day cannot be reached by walking forward from the start day
    /// without leaving the week, or one of the days is missing from the order.
    #[error("event span {start_day} -> {end_day} does not fit inside the displayed week")]
    InvalidEventSpan { start_day: Day, end_day: Day },
}

/// The part of an event that falls inside one day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRect {
    pub day: Day,
    pub vertical_start: u32,
    pub vertical_end: u32,
}

/// Absolute pixel rectangle relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Half-open containment test
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && x - self.x < self.width
            && y - self.y < self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl SegmentRect {
    /// Height in pixels. An end above the start collapses to zero.
    pub fn height(&self) -> u32 {
        self.vertical_end.saturating_sub(self.vertical_start)
    }

    pub fn bounds(&self, geometry: &GridGeometry) -> PixelRect {
        PixelRect {
            x: geometry.column_x(self.day),
            y: self.vertical_start,
            width: geometry.column_width,
            height: self.height(),
        }
    }
}

/// Lay `event` out over the columns of `day_order`.
///
/// Single-day events produce one segment. Longer events produce a segment
/// from the start row to the bottom of the start day, full-height segments
/// for every day in between, and a segment from the top of the end day to
/// the end row, in that order.
pub fn segment(
    event: &Event,
    day_order: &[Day],
    geometry: &GridGeometry,
) -> Result<Vec<SegmentRect>, LayoutError> {
    let invalid_span = || LayoutError::InvalidEventSpan {
        start_day: event.start_day,
        end_day: event.end_day,
    };

    let start_index = day_order
        .iter()
        .position(|day| *day == event.start_day)
        .ok_or_else(invalid_span)?;
    let row_start = geometry.hour_y(event.start_time);
    let row_end = geometry.hour_y(event.end_time);

    if event.start_day == event.end_day {
        return Ok(vec![SegmentRect {
            day: event.start_day,
            vertical_start: row_start,
            vertical_end: row_end,
        }]);
    }

    // Only look forward; an end day earlier in the order would mean wrapping the week.
    let end_index = day_order[start_index + 1..]
        .iter()
        .position(|day| *day == event.end_day)
        .map(|offset| start_index + 1 + offset)
        .ok_or_else(invalid_span)?;

    let mut segments = Vec::with_capacity(end_index - start_index + 1);
    segments.push(SegmentRect {
        day: event.start_day,
        vertical_start: row_start,
        vertical_end: geometry.height,
    });
    for &day in &day_order[start_index + 1..end_index] {
        segments.push(SegmentRect {
            day,
            vertical_start: 0,
            vertical_end: geometry.height,
        });
    }
    segments.push(SegmentRect {
        day: event.end_day,
        vertical_start: 0,
        vertical_end: row_end,
    });

    Ok(segments)
}

/// [`segment`] over the standard Sunday-first week
pub fn segment_week(event: &Event, geometry: &GridGeometry) -> Result<Vec<SegmentRect>, LayoutError> {
    segment(event, &DAY_ORDER, geometry)
}
