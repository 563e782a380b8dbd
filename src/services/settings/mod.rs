// Settings service module
// Loads and saves viewer settings from the platform config directory

mod service;

pub use service::SettingsService;
