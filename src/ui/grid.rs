//! The view-generation engine: turns a reference date, a view mode, and the
//! store's event snapshot into an ordered sequence of cells.
//!
//! Everything here is a pure function of its arguments. Cells are rebuilt
//! from scratch on every call and never mutated afterwards, so re-deriving a
//! grid with the same inputs always yields an identical result.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Timelike, Weekday};

use crate::app::ViewType;
use crate::calendar::CalendarEvent;

pub const DEFAULT_MAX_VISIBLE: usize = 2;
pub const DEFAULT_SLOT_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub week_start: Weekday,
    pub max_visible: usize,
    pub slot_minutes: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            max_visible: DEFAULT_MAX_VISIBLE,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

/// One slot of a rendered grid. `slot` is set in day view only.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub date: NaiveDate,
    pub slot: Option<NaiveTime>,
    pub outside_period: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
    pub overflow_count: usize,
}

impl Cell {
    fn day(date: NaiveDate, outside_period: bool, today: NaiveDate) -> Self {
        Self {
            date,
            slot: None,
            outside_period,
            is_today: date == today,
            events: Vec::new(),
            overflow_count: 0,
        }
    }

    fn time_slot(date: NaiveDate, slot: NaiveTime, today: NaiveDate) -> Self {
        Self {
            slot: Some(slot),
            ..Self::day(date, false, today)
        }
    }
}

/// Skeleton for a month window: the containing month extended backward to
/// the nearest `week_start` and forward to the following week end. The
/// result length is always a multiple of 7.
pub fn month_dates(reference: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let start = week_start_on_or_before(first_of_month(reference), week_start);
    let last_week_start = week_start_on_or_before(last_of_month(reference), week_start);
    let end = last_week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(last_week_start);

    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        let Some(next) = current.succ_opt() else { break };
        current = next;
    }
    dates
}

/// Skeleton for a week window: the 7 dates of the week containing
/// `reference`, starting at `week_start`.
pub fn week_dates(reference: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let start = week_start_on_or_before(reference, week_start);
    (0..7u64)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// Skeleton for a day window: the start times of the slots covering the
/// whole day. A granularity that does not divide the day evenly falls back
/// to hourly slots.
pub fn day_slots(slot_minutes: u32) -> Vec<NaiveTime> {
    let step = if slot_minutes == 0 || (24 * 60) % slot_minutes != 0 {
        DEFAULT_SLOT_MINUTES
    } else {
        slot_minutes
    };

    (0..24 * 60)
        .step_by(step as usize)
        .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

/// Builds the full grid for one window: skeleton plus event placement.
pub fn generate_grid(
    reference: NaiveDate,
    view: ViewType,
    options: GridOptions,
    events: &[CalendarEvent],
    today: NaiveDate,
) -> Vec<Cell> {
    let cells = match view {
        ViewType::Month => month_dates(reference, options.week_start)
            .into_iter()
            .map(|date| {
                let outside =
                    date.month() != reference.month() || date.year() != reference.year();
                Cell::day(date, outside, today)
            })
            .collect(),
        ViewType::Week => week_dates(reference, options.week_start)
            .into_iter()
            .map(|date| Cell::day(date, false, today))
            .collect(),
        ViewType::Day => day_slots(options.slot_minutes)
            .into_iter()
            .map(|slot| Cell::time_slot(reference, slot, today))
            .collect(),
    };

    place_events(cells, events, options)
}

/// Fills each cell with its matching events, time-ascending with insertion
/// order breaking ties, truncated to `max_visible` with the remainder
/// reported as `overflow_count`.
pub fn place_events(
    mut cells: Vec<Cell>,
    events: &[CalendarEvent],
    options: GridOptions,
) -> Vec<Cell> {
    for cell in &mut cells {
        let mut matching: Vec<&CalendarEvent> = events
            .iter()
            .filter(|event| cell_matches(cell, event, options.slot_minutes))
            .collect();
        matching.sort_by_key(|event| event.time);

        let visible = matching.len().min(options.max_visible);
        cell.overflow_count = matching.len() - visible;
        cell.events = matching.into_iter().take(visible).cloned().collect();
    }
    cells
}

fn cell_matches(cell: &Cell, event: &CalendarEvent, slot_minutes: u32) -> bool {
    if event.date != cell.date {
        return false;
    }
    match cell.slot {
        None => true,
        Some(slot) => {
            let slot_start = slot.hour() * 60 + slot.minute();
            let event_start = event.time.hour() * 60 + event.time.minute();
            event_start >= slot_start && event_start < slot_start + slot_minutes
        }
    }
}

pub fn week_start_on_or_before(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(offset as u64)).unwrap_or(date)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next_month_first = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month_first.and_then(|d| d.pred_opt()).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventDraft;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn event(id: &str, on: NaiveDate, at: NaiveTime) -> CalendarEvent {
        EventDraft::new(format!("Event {}", id), on, at, 60).into_event(id.to_string())
    }

    fn options(max_visible: usize) -> GridOptions {
        GridOptions { max_visible, ..GridOptions::default() }
    }

    #[test]
    fn month_skeleton_is_a_multiple_of_seven() {
        for month in 1..=12 {
            let dates = month_dates(date(2025, month, 15), Weekday::Mon);
            assert_eq!(dates.len() % 7, 0, "month {}", month);
        }
    }

    #[test]
    fn month_skeleton_covers_whole_month() {
        let dates = month_dates(date(2025, 4, 8), Weekday::Mon);

        assert!(dates.contains(&date(2025, 4, 1)));
        assert!(dates.contains(&date(2025, 4, 30)));
    }

    #[test]
    fn month_skeleton_pads_to_week_boundaries() {
        // April 2025 starts on a Tuesday and ends on a Wednesday.
        let dates = month_dates(date(2025, 4, 8), Weekday::Mon);

        assert_eq!(dates[0], date(2025, 3, 31));
        assert_eq!(*dates.last().unwrap(), date(2025, 5, 4));
        assert_eq!(dates.len(), 35);
    }

    #[test]
    fn month_skeleton_needs_no_padding_when_aligned() {
        // September 2025 starts on a Monday.
        let dates = month_dates(date(2025, 9, 10), Weekday::Mon);

        assert_eq!(dates[0], date(2025, 9, 1));
    }

    #[test]
    fn month_skeleton_respects_sunday_week_start() {
        let dates = month_dates(date(2025, 4, 8), Weekday::Sun);

        assert_eq!(dates[0], date(2025, 3, 30));
        assert_eq!(dates[0].weekday(), Weekday::Sun);
        assert_eq!(dates.len() % 7, 0);
    }

    #[test]
    fn month_skeleton_spans_year_boundary() {
        let dates = month_dates(date(2025, 1, 15), Weekday::Mon);

        assert_eq!(dates[0], date(2024, 12, 30));
        assert_eq!(*dates.last().unwrap(), date(2025, 2, 2));
    }

    #[test]
    fn month_skeleton_handles_leap_february() {
        let dates = month_dates(date(2024, 2, 10), Weekday::Mon);

        assert!(dates.contains(&date(2024, 2, 29)));
        assert_eq!(dates.len() % 7, 0);
    }

    #[test]
    fn week_skeleton_is_seven_consecutive_days() {
        let dates = week_dates(date(2025, 4, 8), Weekday::Mon);

        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2025, 4, 7));
        assert_eq!(dates[6], date(2025, 4, 13));
    }

    #[test]
    fn week_skeleton_starting_on_week_start_has_no_lead_in() {
        let monday = date(2025, 4, 7);
        let dates = week_dates(monday, Weekday::Mon);

        assert_eq!(dates[0], monday);
    }

    #[test]
    fn week_skeleton_spans_year_boundary() {
        let dates = week_dates(date(2025, 1, 1), Weekday::Mon);

        assert_eq!(dates[0], date(2024, 12, 30));
        assert_eq!(dates[6], date(2025, 1, 5));
    }

    #[test]
    fn day_slots_cover_the_day_hourly_by_default() {
        let slots = day_slots(60);

        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], time(0, 0));
        assert_eq!(slots[23], time(23, 0));
    }

    #[test]
    fn day_slots_support_half_hour_granularity() {
        let slots = day_slots(30);

        assert_eq!(slots.len(), 48);
        assert_eq!(slots[1], time(0, 30));
    }

    #[test]
    fn day_slots_fall_back_to_hourly_on_uneven_granularity() {
        assert_eq!(day_slots(7).len(), 24);
        assert_eq!(day_slots(0).len(), 24);
    }

    #[test]
    fn grid_flags_dates_outside_the_month() {
        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Month,
            options(2),
            &[],
            date(2025, 4, 8),
        );

        let outside: Vec<_> = cells.iter().filter(|c| c.outside_period).collect();
        assert!(outside.iter().all(|c| c.date.month() != 4));
        assert!(outside.iter().any(|c| c.date == date(2025, 3, 31)));
    }

    #[test]
    fn grid_marks_today_from_the_supplied_clock() {
        let today = date(2025, 4, 20);
        let cells = generate_grid(date(2025, 4, 8), ViewType::Month, options(2), &[], today);

        let marked: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);
    }

    #[test]
    fn grid_does_not_mark_today_outside_the_window() {
        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Month,
            options(2),
            &[],
            date(2025, 8, 1),
        );

        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn placement_partitions_events_across_cells() {
        let events = vec![
            event("a", date(2025, 4, 1), time(9, 0)),
            event("b", date(2025, 4, 15), time(12, 0)),
            event("c", date(2025, 4, 30), time(18, 0)),
            event("d", date(2025, 3, 31), time(8, 0)), // padding day, still placed
        ];

        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Month,
            options(10),
            &events,
            date(2025, 4, 8),
        );

        let placed: usize = cells.iter().map(|c| c.events.len()).sum();
        assert_eq!(placed, 4);
        for cell in &cells {
            assert!(cell.events.iter().all(|e| e.date == cell.date));
        }
    }

    #[test]
    fn placement_orders_by_time_then_insertion() {
        let events = vec![
            event("late", date(2025, 4, 8), time(14, 0)),
            event("tie-first", date(2025, 4, 8), time(9, 0)),
            event("tie-second", date(2025, 4, 8), time(9, 0)),
        ];

        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Week,
            options(10),
            &events,
            date(2025, 4, 8),
        );

        let cell = cells.iter().find(|c| c.date == date(2025, 4, 8)).unwrap();
        let ids: Vec<_> = cell.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["tie-first", "tie-second", "late"]);
    }

    #[test]
    fn placement_truncates_to_cap_and_counts_overflow() {
        let events = vec![
            event("a", date(2025, 4, 8), time(10, 0)),
            event("b", date(2025, 4, 8), time(14, 0)),
            event("c", date(2025, 4, 8), time(9, 0)),
        ];

        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Month,
            options(2),
            &events,
            date(2025, 4, 8),
        );

        let cell = cells.iter().find(|c| c.date == date(2025, 4, 8)).unwrap();
        let times: Vec<_> = cell.events.iter().map(|e| e.time).collect();
        assert_eq!(times, vec![time(9, 0), time(10, 0)]);
        assert_eq!(cell.overflow_count, 1);
    }

    #[test]
    fn placement_is_deterministic() {
        let events = vec![
            event("a", date(2025, 4, 8), time(10, 0)),
            event("b", date(2025, 4, 8), time(14, 0)),
            event("c", date(2025, 4, 8), time(9, 0)),
        ];

        let first = generate_grid(
            date(2025, 4, 8),
            ViewType::Month,
            options(2),
            &events,
            date(2025, 4, 8),
        );
        let second = generate_grid(
            date(2025, 4, 8),
            ViewType::Month,
            options(2),
            &events,
            date(2025, 4, 8),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn cells_without_matches_report_zero_overflow() {
        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Week,
            options(2),
            &[],
            date(2025, 4, 8),
        );

        assert!(cells.iter().all(|c| c.events.is_empty() && c.overflow_count == 0));
    }

    #[test]
    fn day_view_assigns_each_event_to_one_slot() {
        let events = vec![
            event("quarter-past", date(2025, 4, 8), time(9, 15)),
            event("on-the-hour", date(2025, 4, 8), time(14, 0)),
            event("other-day", date(2025, 4, 9), time(9, 15)),
        ];

        let cells = generate_grid(
            date(2025, 4, 8),
            ViewType::Day,
            options(10),
            &events,
            date(2025, 4, 8),
        );

        let placed: usize = cells.iter().map(|c| c.events.len()).sum();
        assert_eq!(placed, 2);

        let nine = cells.iter().find(|c| c.slot == Some(time(9, 0))).unwrap();
        assert_eq!(nine.events.len(), 1);
        assert_eq!(nine.events[0].id, "quarter-past");
    }

    #[test]
    fn day_view_respects_slot_granularity() {
        let events = vec![event("half-past", date(2025, 4, 8), time(9, 40))];
        let opts = GridOptions { slot_minutes: 30, ..options(10) };

        let cells = generate_grid(date(2025, 4, 8), ViewType::Day, opts, &events, date(2025, 4, 8));

        let slot = cells.iter().find(|c| !c.events.is_empty()).unwrap();
        assert_eq!(slot.slot, Some(time(9, 30)));
    }
}
