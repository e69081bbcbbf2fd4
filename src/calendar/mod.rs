pub mod date_format;
pub mod event;
pub mod store;

pub use date_format::{DateParseError, format_date, format_time, parse_date, parse_time};
pub use event::{CalendarEvent, DEFAULT_EVENT_COLOR, EventDraft, EventStatus};
pub use store::{EventStore, StoreError, ValidationError};
