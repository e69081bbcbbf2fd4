use chrono::NaiveDate;

use crate::app::{AppState, ViewType};
use crate::ui::grid::{self, Cell};

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    pub slots: Vec<Cell>,
}

/// Time-slot rows for the reference date; granularity comes from
/// configuration (hourly by default).
pub fn calculate_layout(state: &AppState, today: NaiveDate) -> DayLayout {
    let slots = grid::generate_grid(
        state.reference_date,
        ViewType::Day,
        state.grid_options(),
        state.store.events(),
        today,
    );

    DayLayout {
        date: state.reference_date,
        is_today: state.reference_date == today,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventDraft, EventStore};
    use chrono::NaiveTime;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn app_at(reference: NaiveDate) -> AppState {
        let mut app = AppState::new(EventStore::new());
        app.reference_date = reference;
        app
    }

    #[test]
    fn layout_covers_the_day_hourly_by_default() {
        let layout = calculate_layout(&app_at(date(2025, 4, 8)), date(2025, 4, 8));

        assert_eq!(layout.slots.len(), 24);
        assert_eq!(layout.slots[9].slot, Some(time(9, 0)));
    }

    #[test]
    fn is_today_reflects_the_supplied_clock() {
        let layout = calculate_layout(&app_at(date(2025, 4, 8)), date(2025, 4, 8));
        assert!(layout.is_today);

        let layout = calculate_layout(&app_at(date(2025, 4, 8)), date(2025, 4, 9));
        assert!(!layout.is_today);
    }

    #[test]
    fn events_land_in_their_slot() {
        let mut app = app_at(date(2025, 4, 8));
        app.store
            .create(EventDraft::new("Standup", date(2025, 4, 8), time(9, 15), 15))
            .unwrap();

        let layout = calculate_layout(&app, date(2025, 4, 8));

        assert_eq!(layout.slots[9].events.len(), 1);
        assert_eq!(layout.slots[9].events[0].title, "Standup");
        assert!(layout.slots[10].events.is_empty());
    }

    #[test]
    fn slot_granularity_follows_configuration() {
        let mut app = app_at(date(2025, 4, 8));
        app.day_slot_minutes = 30;

        let layout = calculate_layout(&app, date(2025, 4, 8));

        assert_eq!(layout.slots.len(), 48);
    }
}
