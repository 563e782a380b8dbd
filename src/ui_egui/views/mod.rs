pub mod grid_renderer;
pub mod utils;
pub mod week_view;

pub use week_view::{EventSelection, SelectionListener, WeekView};
