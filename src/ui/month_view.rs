use chrono::{Datelike, NaiveDate};

use crate::app::{AppState, ViewType};
use crate::ui::grid::{self, Cell};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub cells: Vec<Cell>,
}

/// Month grid for the reference date, chunked into rows of seven.
pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let cells = grid::generate_grid(
        state.reference_date,
        ViewType::Month,
        state.grid_options(),
        state.store.events(),
        today,
    );

    MonthLayout {
        year: state.reference_date.year(),
        month: state.reference_date.month(),
        weeks: cells
            .chunks(7)
            .map(|chunk| Week { cells: chunk.to_vec() })
            .collect(),
    }
}
