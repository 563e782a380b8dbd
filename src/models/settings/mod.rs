// Settings module
// Viewer preferences persisted as TOML

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub theme: ThemeName,
    /// Color events hosted by the selected user differently
    pub host_view: bool,
    /// User selected on startup; falls back to the first user in the roster
    pub default_user: Option<String>,
    /// Schedule document opened when no path is given on the command line
    pub schedule_path: Option<PathBuf>,
    /// Hex override for host segments, e.g. `#3C78D8`
    pub host_color: Option<String>,
    /// Hex override for attendee segments
    pub attendee_color: Option<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            theme: ThemeName::Light,
            host_view: true,
            default_user: None,
            schedule_path: None,
            host_color: None,
            attendee_color: None,
            window_width: 900.0,
            window_height: 760.0,
        }
    }
}
