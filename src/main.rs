// Week Planner Application
// Main entry point

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use week_planner::services::planner::{InMemoryPlanner, ReadOnlyPlanner};
use week_planner::services::settings::SettingsService;
use week_planner::ui_egui::PlannerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Week Planner");

    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.load_or_default();

    // A path on the command line wins over the configured schedule
    let schedule_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.schedule_path.clone());

    let planner: Box<dyn ReadOnlyPlanner> = match schedule_path {
        Some(path) => Box::new(InMemoryPlanner::load_json(&path)?),
        None => {
            log::warn!("No schedule given; starting with an empty planner");
            Box::new(InMemoryPlanner::default())
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Week Planner")
            .with_inner_size(egui::vec2(settings.window_width, settings.window_height))
            .with_min_inner_size(egui::vec2(420.0, 360.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Week Planner",
        options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, planner, settings, settings_service)))),
    )
    .map_err(|err| anyhow!("Failed to run the planner window: {}", err))
}
