use chrono::NaiveDate;

use crate::app::{AppState, ViewType};
use crate::ui::grid::{self, Cell};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<Cell>,
}

/// Seven day columns for the week containing the reference date.
pub fn calculate_layout(state: &AppState, today: NaiveDate) -> WeekLayout {
    let days = grid::generate_grid(
        state.reference_date,
        ViewType::Week,
        state.grid_options(),
        state.store.events(),
        today,
    );

    let week_start = days
        .first()
        .map(|cell| cell.date)
        .unwrap_or(state.reference_date);

    WeekLayout { week_start, days }
}
