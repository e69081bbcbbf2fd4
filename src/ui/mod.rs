pub mod day_view;
pub mod grid;
pub mod month_view;
pub mod theme;
pub mod week_view;

pub use grid::{Cell, GridOptions, generate_grid};
