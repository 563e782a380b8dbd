//! Full-schedule layout pass.
//!
//! Segments every event, tags the segments with the event's variant and keeps
//! going when a single event cannot be laid out.

use super::geometry::GridGeometry;
use super::segmenter::{segment_week, LayoutError, PixelRect, SegmentRect};
use super::variant::{select_variant, Variant};
use crate::models::event::Event;
use crate::models::user::User;

/// One segment ready to be drawn, pointing back at its event by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSegment {
    pub event_index: usize,
    pub rect: SegmentRect,
    pub variant: Variant,
}

/// An event left out of the layout and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    pub event_index: usize,
    pub error: LayoutError,
}

/// Result of laying out a schedule for one surface size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeekLayout {
    pub geometry: GridGeometry,
    /// In insertion order: events in schedule order, each event's days in calendar order
    pub segments: Vec<PlacedSegment>,
    pub skipped: Vec<SkippedEvent>,
}

impl WeekLayout {
    pub fn bounds(&self, segment: &PlacedSegment) -> PixelRect {
        segment.rect.bounds(&self.geometry)
    }

    /// Topmost segment under a point. Later segments are drawn over earlier ones.
    pub fn hit_test(&self, x: u32, y: u32) -> Option<&PlacedSegment> {
        self.segments
            .iter()
            .rev()
            .find(|segment| self.bounds(segment).contains(x, y))
    }

    pub fn segments_for(&self, event_index: usize) -> impl Iterator<Item = &PlacedSegment> + '_ {
        self.segments
            .iter()
            .filter(move |segment| segment.event_index == event_index)
    }
}

/// Lay out `events` as seen by `subject`.
///
/// The variant is chosen once per event and shared by all of its segments.
/// Events whose span leaves the week are recorded in [`WeekLayout::skipped`].
pub fn layout_schedule(
    events: &[Event],
    subject: &User,
    host_view: bool,
    geometry: GridGeometry,
) -> WeekLayout {
    let mut layout = WeekLayout {
        geometry,
        ..WeekLayout::default()
    };

    for (event_index, event) in events.iter().enumerate() {
        match segment_week(event, &geometry) {
            Ok(rects) => {
                let variant = select_variant(event, subject, host_view);
                layout
                    .segments
                    .extend(rects.into_iter().map(|rect| PlacedSegment {
                        event_index,
                        rect,
                        variant,
                    }));
            }
            Err(error) => {
                log::warn!("Skipping event '{}' for {}: {}", event.name, subject, error);
                layout.skipped.push(SkippedEvent { event_index, error });
            }
        }
    }

    log::debug!(
        "Laid out {} segment(s) for {} event(s) on {}x{} ({} skipped)",
        layout.segments.len(),
        events.len(),
        geometry.width,
        geometry.height,
        layout.skipped.len()
    );

    layout
}
