pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, Mode, ViewType};
pub use calendar::{CalendarEvent, EventDraft, EventStatus, EventStore};

pub use input::{command_mode, insert_mode, normal_mode};
