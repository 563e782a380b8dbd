// Module exports for models

pub mod day;
pub mod event;
pub mod settings;
pub mod user;
