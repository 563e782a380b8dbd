//! Theme module for the week planner
//!
//! Colors for the grid, the surrounding panel and the two segment variants.

use egui::Color32;

use crate::models::settings::{ThemeName, ViewerSettings};
use crate::services::layout::Variant;

/// Fill colors per segment variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPalette {
    pub host: Color32,
    pub attendee: Color32,
}

impl SegmentPalette {
    pub fn color_for(&self, variant: Variant) -> Color32 {
        match variant {
            Variant::Host => self.host,
            Variant::Attendee => self.attendee,
        }
    }
}

/// A week view theme
#[derive(Debug, Clone, PartialEq)]
pub struct WeekTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,

    /// Background behind the grid
    pub grid_background: Color32,

    /// Hour lines and day separators
    pub grid_line: Color32,

    /// Outline around each segment
    pub segment_border: Color32,

    pub segment_text: Color32,

    pub header_text: Color32,

    pub segments: SegmentPalette,
}

impl WeekTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            grid_line: Color32::BLACK,
            segment_border: Color32::from_rgb(40, 40, 40),
            segment_text: Color32::WHITE,
            header_text: Color32::from_rgb(40, 40, 40),
            segments: SegmentPalette {
                host: Color32::from_rgb(60, 120, 216),
                attendee: Color32::from_rgb(214, 69, 65),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(120, 120, 124),
            grid_line: Color32::BLACK,
            segment_border: Color32::from_rgb(20, 20, 20),
            segment_text: Color32::from_rgb(240, 240, 240),
            header_text: Color32::from_rgb(240, 240, 240),
            segments: SegmentPalette {
                host: Color32::from_rgb(40, 90, 180),
                attendee: Color32::from_rgb(170, 50, 48),
            },
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Theme named in the settings with any segment color overrides applied.
    /// Unparseable overrides are logged and ignored.
    pub fn from_settings(settings: &ViewerSettings) -> Self {
        let mut theme = Self::from_name(settings.theme);
        if let Some(hex) = settings.host_color.as_deref() {
            match Self::hex_to_color(hex) {
                Ok(color) => theme.segments.host = color,
                Err(err) => log::warn!("Ignoring host color '{}': {}", hex, err),
            }
        }
        if let Some(hex) = settings.attendee_color.as_deref() {
            match Self::hex_to_color(hex) {
                Ok(color) => theme.segments.attendee = color,
                Err(err) => log::warn!("Ignoring attendee color '{}': {}", hex, err),
            }
        }
        theme
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}

impl Default for WeekTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        let color = Color32::from_rgb(255, 128, 64);
        assert_eq!(WeekTheme::color_to_hex(color), "#FF8040");
    }

    #[test]
    fn test_hex_to_color() {
        let result = WeekTheme::hex_to_color("#FF8040").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 128, 64));

        let result2 = WeekTheme::hex_to_color("FF8040").unwrap();
        assert_eq!(result2, Color32::from_rgb(255, 128, 64));

        assert!(WeekTheme::hex_to_color("#F84").is_err());
        assert!(WeekTheme::hex_to_color("#GG8040").is_err());
    }

    #[test]
    fn test_palette_lookup() {
        let theme = WeekTheme::light();
        assert_eq!(theme.segments.color_for(Variant::Host), theme.segments.host);
        assert_eq!(theme.segments.color_for(Variant::Attendee), theme.segments.attendee);
        assert_ne!(theme.segments.host, theme.segments.attendee);
    }

    #[test]
    fn test_grid_lines_are_black_in_both_themes() {
        assert_eq!(WeekTheme::light().grid_line, Color32::BLACK);
        assert_eq!(WeekTheme::dark().grid_line, Color32::BLACK);
    }

    #[test]
    fn test_from_settings_applies_overrides() {
        let settings = ViewerSettings {
            theme: ThemeName::Dark,
            host_color: Some("#00FF00".to_string()),
            attendee_color: Some("not a color".to_string()),
            ..ViewerSettings::default()
        };
        let theme = WeekTheme::from_settings(&settings);
        assert!(theme.is_dark);
        assert_eq!(theme.segments.host, Color32::from_rgb(0, 255, 0));
        assert_eq!(theme.segments.attendee, WeekTheme::dark().segments.attendee);
    }
}
