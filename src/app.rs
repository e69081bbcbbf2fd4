use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

use crate::calendar::date_format::{self, DateParseError};
use crate::calendar::{CalendarEvent, DEFAULT_EVENT_COLOR, EventDraft, EventStatus, EventStore};
use crate::ui::grid::GridOptions;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Month,
    Week,
    Day,
}

pub struct AppState {
    pub mode: Mode,
    pub view: ViewType,
    /// Anchor for the visible window; the grid derives everything from it.
    pub reference_date: NaiveDate,
    pub store: EventStore,
    pub week_start: Weekday,
    pub max_visible_events: usize,
    pub day_slot_minutes: u32,
    pub theme: Theme,
    pub command_buffer: String,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub event_form: Option<EventForm>,
    pub selected_event_index: usize,
    pub delete_confirmation_event_id: Option<String>,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self {
            mode: Mode::Normal,
            view: ViewType::Month,
            reference_date: Local::now().date_naive(),
            store,
            week_start: Weekday::Mon,
            max_visible_events: crate::ui::grid::DEFAULT_MAX_VISIBLE,
            day_slot_minutes: crate::ui::grid::DEFAULT_SLOT_MINUTES,
            theme: Theme::default(),
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            help_scroll: 0,
            event_form: None,
            selected_event_index: 0,
            delete_confirmation_event_id: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_view(mut self, view: ViewType) -> Self {
        self.view = view;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_event_cap(mut self, max_visible_events: usize) -> Self {
        self.max_visible_events = max_visible_events;
        self
    }

    pub fn with_slot_minutes(mut self, day_slot_minutes: u32) -> Self {
        self.day_slot_minutes = day_slot_minutes;
        self
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            week_start: self.week_start,
            max_visible: self.max_visible_events,
            slot_minutes: self.day_slot_minutes,
        }
    }

    /// Advances the reference date by one unit of the current view. Month
    /// navigation pins the anchor to the 1st so repeated presses are stable
    /// no matter which day-of-month the user started from.
    pub fn next_period(&mut self) {
        self.shift_period(true);
    }

    pub fn previous_period(&mut self) {
        self.shift_period(false);
    }

    fn shift_period(&mut self, forward: bool) {
        let current = self.reference_date;
        self.reference_date = match self.view {
            ViewType::Month => {
                let anchor = current.with_day(1).unwrap_or(current);
                let shifted = if forward {
                    anchor.checked_add_months(Months::new(1))
                } else {
                    anchor.checked_sub_months(Months::new(1))
                };
                shifted.unwrap_or(anchor)
            }
            ViewType::Week => step_days(current, 7, forward),
            ViewType::Day => step_days(current, 1, forward),
        };
        tracing::debug!(from = %current, to = %self.reference_date, "period shifted");
        self.reset_event_selection();
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        tracing::info!(%date, "jumped to date");
        self.reference_date = date;
        self.reset_event_selection();
    }

    pub fn jump_to_today(&mut self) {
        self.jump_to(Local::now().date_naive());
    }

    /// Changes granularity only; the reference date stays put, so the new
    /// window still contains the day the user was looking at.
    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
        self.reset_event_selection();
    }

    pub fn events_on_reference_date(&self) -> Vec<&CalendarEvent> {
        self.store.events_on(self.reference_date)
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.events_on_reference_date()
            .get(self.selected_event_index)
            .copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let count = self.events_on_reference_date().len();
        if count > 0 && self.selected_event_index < count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        self.selected_event_index = self.selected_event_index.saturating_sub(1);
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

fn step_days(date: NaiveDate, days: u64, forward: bool) -> NaiveDate {
    let shifted = if forward {
        date.checked_add_days(Days::new(days))
    } else {
        date.checked_sub_days(Days::new(days))
    };
    shifted.unwrap_or(date)
}

/// Text buffers backing the create/edit dialog. Date and time are kept as
/// raw input and go through the strict parsers only on submit.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub date_buffer: String,
    pub time_buffer: String,
    pub duration_buffer: String,
    pub location: String,
    pub notes: String,
    pub active_field: FormField,
    pub event_id: Option<String>,
    pub error: Option<String>,
    status: EventStatus,
    color: String,
    attendees: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    StartTime,
    Duration,
    Location,
    Notes,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::Date,
        FormField::StartTime,
        FormField::Duration,
        FormField::Location,
        FormField::Notes,
    ];
}

impl EventForm {
    pub fn new(date: NaiveDate, title: String) -> Self {
        Self {
            title,
            date_buffer: date_format::format_date(date),
            time_buffer: "09:00".to_string(),
            duration_buffer: "60".to_string(),
            location: String::new(),
            notes: String::new(),
            active_field: FormField::Title,
            event_id: None,
            error: None,
            status: EventStatus::Confirmed,
            color: DEFAULT_EVENT_COLOR.to_string(),
            attendees: None,
        }
    }

    pub fn for_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            date_buffer: date_format::format_date(event.date),
            time_buffer: date_format::format_time(event.time),
            duration_buffer: event.duration_minutes.to_string(),
            location: event.location.clone().unwrap_or_default(),
            notes: event.notes.clone().unwrap_or_default(),
            active_field: FormField::Title,
            event_id: Some(event.id.clone()),
            error: None,
            status: event.status,
            color: event.color.clone(),
            attendees: event.attendees,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn next_field(&mut self) {
        self.active_field = Self::neighbor(self.active_field, 1);
    }

    pub fn prev_field(&mut self) {
        self.active_field = Self::neighbor(self.active_field, FormField::ORDER.len() - 1);
    }

    fn neighbor(field: FormField, step: usize) -> FormField {
        let index = FormField::ORDER
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
        FormField::ORDER[(index + step) % FormField::ORDER.len()]
    }

    /// Validates the buffers and produces a store draft. The error string
    /// is what the dialog shows in its status line.
    pub fn to_draft(&self) -> Result<EventDraft, String> {
        let date = date_format::parse_date(&self.date_buffer)
            .map_err(|err| describe_date_error(&self.date_buffer, err))?;
        let time = date_format::parse_time(&self.time_buffer)
            .map_err(|err| describe_date_error(&self.time_buffer, err))?;
        let duration_minutes: u32 = self
            .duration_buffer
            .parse()
            .map_err(|_| format!("invalid duration '{}'", self.duration_buffer))?;

        Ok(EventDraft {
            title: self.title.clone(),
            date,
            time,
            duration_minutes,
            status: self.status,
            color: self.color.clone(),
            location: (!self.location.is_empty()).then(|| self.location.clone()),
            attendees: self.attendees,
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
        })
    }
}

fn describe_date_error(input: &str, err: DateParseError) -> String {
    format!("invalid input '{}': {}", input, err)
}
