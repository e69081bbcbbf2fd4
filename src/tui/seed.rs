use std::path::Path;

use chrono::{Days, NaiveDate, NaiveTime};
use thiserror::Error;

use calgrid::calendar::{EventDraft, EventStatus};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads event drafts from a JSON file supplied with `--events`.
pub fn load_drafts(path: &Path) -> Result<Vec<EventDraft>, SeedError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// The built-in demo schedule, anchored on the given day so the calendar
/// opens with something visible.
pub fn sample_drafts(today: NaiveDate) -> Vec<EventDraft> {
    let day = |offset: u64| today.checked_add_days(Days::new(offset)).unwrap_or(today);
    let at = |hour: u32, minute: u32| NaiveTime::from_hms_opt(hour, minute, 0);

    let entries = [
        (
            "Strategy Meeting",
            day(0),
            at(10, 0),
            60,
            EventStatus::Confirmed,
            "#3498db",
            Some("Conference Room A"),
            Some(4),
            Some("Quarterly strategy planning session with the executive team."),
        ),
        (
            "Doctor Appointment",
            day(0),
            at(14, 0),
            30,
            EventStatus::Confirmed,
            "#e74c3c",
            Some("Medical Center"),
            Some(1),
            None,
        ),
        (
            "Team Lunch",
            day(1),
            at(12, 0),
            90,
            EventStatus::Pending,
            "#2ecc71",
            Some("Downtown Bistro"),
            Some(6),
            Some("Monthly team lunch to discuss progress and celebrate achievements."),
        ),
        (
            "Project Review",
            day(2),
            at(15, 0),
            45,
            EventStatus::Confirmed,
            "#9b59b6",
            Some("Online Meeting"),
            None,
            None,
        ),
        (
            "Client Call",
            day(3),
            at(11, 0),
            30,
            EventStatus::Cancelled,
            "#f39c12",
            Some("Phone Conference"),
            None,
            None,
        ),
    ];

    entries
        .into_iter()
        .filter_map(
            |(title, date, time, duration, status, color, location, attendees, notes)| {
                let time = time?;
                let mut draft = EventDraft::new(title, date, time, duration);
                draft.status = status;
                draft.color = color.to_string();
                draft.location = location.map(String::from);
                draft.attendees = attendees;
                draft.notes = notes.map(String::from);
                Some(draft)
            },
        )
        .collect()
}
