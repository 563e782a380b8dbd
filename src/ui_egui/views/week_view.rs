//! Week view: one user's schedule on a 7 day by 24 hour grid.
//!
//! Every frame the layout is rebuilt from scratch for the current surface
//! size, segments are painted over the grid lines, and clicks on a segment
//! are forwarded to a [`SelectionListener`].

use egui::{Align2, FontId, Painter, Pos2, Rect, Sense, Stroke};

use super::grid_renderer::draw_grid_lines;
use super::utils::{format_event_tooltip, roster_names};
use crate::models::day::DAY_ORDER;
use crate::models::event::Event;
use crate::models::user::User;
use crate::services::layout::{
    layout_schedule, plan_grid_lines, GridGeometry, PixelRect, PlacedSegment, Variant, WeekLayout,
};
use crate::ui_egui::theme::WeekTheme;

pub const HEADER_HEIGHT: f32 = 22.0;
const LABEL_MIN_HEIGHT: f32 = 14.0;
const SEGMENT_BORDER: f32 = 1.0;

/// What a listener receives when a segment is clicked
#[derive(Debug, Clone, PartialEq)]
pub struct EventSelection {
    pub event: Event,
    /// User whose schedule is on display
    pub subject: User,
    /// Every user in the planner, for the detail view's user picker
    pub available_users: Vec<String>,
}

/// Receives segment clicks from the week view
pub trait SelectionListener {
    fn on_event_selected(&mut self, selection: EventSelection);
}

pub struct WeekView<'a> {
    events: &'a [Event],
    subject: &'a User,
    roster: &'a [User],
    theme: &'a WeekTheme,
    host_view: bool,
}

impl<'a> WeekView<'a> {
    pub fn new(events: &'a [Event], subject: &'a User, roster: &'a [User], theme: &'a WeekTheme) -> Self {
        Self {
            events,
            subject,
            roster,
            theme,
            host_view: false,
        }
    }

    pub fn host_view(mut self, host_view: bool) -> Self {
        self.host_view = host_view;
        self
    }

    /// Lay out and paint the week into all remaining space of `ui`.
    pub fn show(self, ui: &mut egui::Ui, listener: &mut dyn SelectionListener) -> WeekLayout {
        let (header_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), HEADER_HEIGHT),
            Sense::hover(),
        );
        let (grid_rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

        let geometry = GridGeometry::from_surface(grid_rect.width(), grid_rect.height());
        self.paint_header(ui.painter(), header_rect, &geometry);

        let layout = layout_schedule(self.events, self.subject, self.host_view, geometry);

        let painter = ui.painter_at(grid_rect);
        painter.rect_filled(grid_rect, 0.0, self.theme.grid_background);
        draw_grid_lines(
            &painter,
            grid_rect.min,
            &geometry,
            &plan_grid_lines(&geometry),
            self.theme.grid_line,
        );

        let mut previous_event = None;
        for placed in &layout.segments {
            // Label only the first segment of each event
            let label = (previous_event != Some(placed.event_index))
                .then(|| self.events[placed.event_index].name.as_str());
            previous_event = Some(placed.event_index);

            let rect = segment_screen_rect(grid_rect.min, layout.bounds(placed));
            paint_segment(&painter, rect, placed.variant, label, self.theme);
        }

        if response.clicked() {
            if let Some(placed) = response
                .interact_pointer_pos()
                .and_then(|pos| segment_at(&layout, grid_rect.min, pos))
            {
                let selection = self.selection_for(placed.event_index);
                log::debug!(
                    "Selected '{}' in {}'s schedule",
                    selection.event.name,
                    selection.subject
                );
                listener.on_event_selected(selection);
            }
        }

        if let Some(placed) = response
            .hover_pos()
            .and_then(|pos| segment_at(&layout, grid_rect.min, pos))
        {
            let tooltip = format_event_tooltip(&self.events[placed.event_index]);
            response.on_hover_text_at_pointer(tooltip);
        }

        layout
    }

    fn selection_for(&self, event_index: usize) -> EventSelection {
        EventSelection {
            event: self.events[event_index].clone(),
            subject: self.subject.clone(),
            available_users: roster_names(self.roster),
        }
    }

    fn paint_header(&self, painter: &Painter, rect: Rect, geometry: &GridGeometry) {
        if geometry.column_width == 0 {
            return;
        }
        let half_column = geometry.column_width as f32 / 2.0;
        for day in DAY_ORDER {
            let x = rect.left() + geometry.column_x(day) as f32 + half_column;
            painter.text(
                egui::pos2(x, rect.center().y),
                Align2::CENTER_CENTER,
                day.short_name(),
                FontId::proportional(13.0),
                self.theme.header_text,
            );
        }
    }
}

/// Screen rectangle of a segment for a grid whose top-left corner is `origin`
pub fn segment_screen_rect(origin: Pos2, bounds: PixelRect) -> Rect {
    Rect::from_min_size(
        origin + egui::vec2(bounds.x as f32, bounds.y as f32),
        egui::vec2(bounds.width as f32, bounds.height as f32),
    )
}

/// Segment under a screen position, if any
pub fn segment_at(layout: &WeekLayout, origin: Pos2, pos: Pos2) -> Option<&PlacedSegment> {
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    layout.hit_test(local.x as u32, local.y as u32)
}

/// Paint one segment in its variant's color. Zero-area segments are skipped.
fn paint_segment(painter: &Painter, rect: Rect, variant: Variant, label: Option<&str>, theme: &WeekTheme) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    painter.rect_filled(rect, 0.0, theme.segments.color_for(variant));
    painter.rect_stroke(rect, 0.0, Stroke::new(SEGMENT_BORDER, theme.segment_border));

    if let Some(label) = label.filter(|text| !text.is_empty()) {
        if rect.height() >= LABEL_MIN_HEIGHT {
            painter.with_clip_rect(rect.shrink(SEGMENT_BORDER)).text(
                rect.left_top() + egui::vec2(4.0, 2.0),
                Align2::LEFT_TOP,
                label,
                FontId::proportional(12.0),
                theme.segment_text,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day::Day;
    use crate::services::layout::compute_geometry;

    fn layout() -> WeekLayout {
        let events = vec![Event::builder()
            .name("Lecture")
            .starts(Day::Monday, 900)
            .ends(Day::Monday, 1100)
            .host(User::new("Lucia"))
            .build()
            .unwrap()];
        layout_schedule(&events, &User::new("Lucia"), true, compute_geometry(700, 690))
    }

    #[test]
    fn test_segment_screen_rect() {
        let rect = segment_screen_rect(
            egui::pos2(10.0, 20.0),
            PixelRect { x: 100, y: 270, width: 100, height: 60 },
        );
        assert_eq!(rect.min, egui::pos2(110.0, 290.0));
        assert_eq!(rect.max, egui::pos2(210.0, 350.0));
    }

    #[test]
    fn test_segment_at_translates_screen_position() {
        let layout = layout();
        let origin = egui::pos2(10.0, 20.0);

        let hit = segment_at(&layout, origin, egui::pos2(150.0, 320.0));
        assert_eq!(hit.map(|s| s.variant), Some(Variant::Host));

        assert!(segment_at(&layout, origin, egui::pos2(5.0, 320.0)).is_none());
        assert!(segment_at(&layout, origin, egui::pos2(150.0, 10.0)).is_none());
    }
}
