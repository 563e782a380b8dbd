use crate::models::settings::ViewerSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Settings stored at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings stored in the platform config directory, or the working
    /// directory when none can be resolved
    pub fn from_project_dirs() -> Self {
        if let Some(dirs) = ProjectDirs::from("com", "WeekPlanner", "WeekPlanner") {
            Self::new(dirs.config_dir().join(SETTINGS_FILE))
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            Self::new(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file
    pub fn load(&self) -> Result<ViewerSettings> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings at {}", self.path.display()))?;
        let settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings at {}", self.path.display()))?;
        Ok(settings)
    }

    /// Read the settings file, falling back to defaults when it is missing or broken
    pub fn load_or_default(&self) -> ViewerSettings {
        if !self.path.exists() {
            log::info!("No settings at {}; using defaults", self.path.display());
            return ViewerSettings::default();
        }
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}; using defaults", err);
                ViewerSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &ViewerSettings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings at {}", self.path.display()))?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
