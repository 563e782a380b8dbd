//! Draws planned grid lines onto an egui painter.

use egui::{Color32, Painter, Pos2, Stroke};

use crate::services::layout::{GridGeometry, GridLine};

/// Screen-space endpoints of `line` for a grid whose top-left corner is `origin`
pub fn line_points(origin: Pos2, geometry: &GridGeometry, line: &GridLine) -> [Pos2; 2] {
    let [(x1, y1), (x2, y2)] = line.endpoints(geometry);
    [
        origin + egui::vec2(x1 as f32, y1 as f32),
        origin + egui::vec2(x2 as f32, y2 as f32),
    ]
}

pub fn draw_grid_lines(
    painter: &Painter,
    origin: Pos2,
    geometry: &GridGeometry,
    lines: &[GridLine],
    color: Color32,
) {
    for line in lines {
        painter.line_segment(
            line_points(origin, geometry, line),
            Stroke::new(line.thickness, color),
        );
    }
}
