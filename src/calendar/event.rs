use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_COLOR: &str = "#3498db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub status: EventStatus,
    pub color: String,
    pub location: Option<String>,
    pub attendees: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

impl CalendarEvent {
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn end_datetime(&self) -> NaiveDateTime {
        self.start_datetime() + chrono::Duration::minutes(self.duration_minutes as i64)
    }
}

/// The writable fields of an event; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_color() -> String {
    DEFAULT_EVENT_COLOR.to_string()
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime, duration_minutes: u32) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            duration_minutes,
            status: EventStatus::Confirmed,
            color: default_color(),
            location: None,
            attendees: None,
            notes: None,
        }
    }

    pub fn into_event(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            status: self.status,
            color: self.color,
            location: self.location,
            attendees: self.attendees,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn draft_defaults_to_confirmed_status() {
        let draft = EventDraft::new("Meeting", date(2025, 4, 8), time(10, 0), 60);
        assert_eq!(draft.status, EventStatus::Confirmed);
    }

    #[test]
    fn end_datetime_adds_duration() {
        let event = EventDraft::new("Meeting", date(2025, 4, 8), time(10, 0), 90)
            .into_event("e1".to_string());

        assert_eq!(event.end_datetime(), date(2025, 4, 8).and_time(time(11, 30)));
    }

    #[test]
    fn end_datetime_crosses_midnight() {
        let event = EventDraft::new("Late call", date(2025, 4, 8), time(23, 30), 60)
            .into_event("e1".to_string());

        assert_eq!(event.end_datetime(), date(2025, 4, 9).and_time(time(0, 30)));
    }

    #[test]
    fn draft_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "title": "Team Lunch",
            "date": "2025-04-09",
            "time": "12:00:00",
            "duration_minutes": 90
        }"#;

        let draft: EventDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.title, "Team Lunch");
        assert_eq!(draft.status, EventStatus::Confirmed);
        assert_eq!(draft.color, DEFAULT_EVENT_COLOR);
        assert_eq!(draft.location, None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&EventStatus::Cancelled).unwrap();
        assert_eq!(json, r#""cancelled""#);
    }
}
