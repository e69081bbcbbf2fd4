use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use uuid::Uuid;

use crate::calendar::event::{CalendarEvent, EventDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("event not found: {0}")]
    NotFound(String),
    #[error("invalid event: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("duration must be at least one minute")]
    ZeroDuration,
}

/// In-memory event collection. Insertion order is part of the contract:
/// events that share a start time render first-created first, and
/// update/move never change an event's position.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Builds a store from an explicit seed list. Invalid drafts are
    /// skipped with a warning rather than aborting startup.
    pub fn seeded(drafts: Vec<EventDraft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            let title = draft.title.clone();
            if let Err(err) = store.create(draft) {
                tracing::warn!("skipping seed event '{}': {}", title, err);
            }
        }
        store
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events on one date, time-ascending; ties keep insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        let mut matching: Vec<&CalendarEvent> =
            self.events.iter().filter(|event| event.date == date).collect();
        matching.sort_by_key(|event| event.time);
        matching
    }

    pub fn create(&mut self, draft: EventDraft) -> Result<&CalendarEvent, StoreError> {
        validate(&draft)?;
        let id = self.fresh_id();
        tracing::info!(%id, title = %draft.title, "event created");
        self.events.push(draft.into_event(id));
        Ok(&self.events[self.events.len() - 1])
    }

    pub fn update(&mut self, id: &str, draft: EventDraft) -> Result<&CalendarEvent, StoreError> {
        validate(&draft)?;
        let Some(index) = self.index_of(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        tracing::info!(%id, title = %draft.title, "event updated");
        self.events[index] = draft.into_event(id.to_string());
        Ok(&self.events[index])
    }

    pub fn delete(&mut self, id: &str) -> Result<CalendarEvent, StoreError> {
        let Some(index) = self.index_of(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        tracing::info!(%id, "event deleted");
        Ok(self.events.remove(index))
    }

    /// Reschedules an event, touching nothing but its date and time.
    pub fn move_to(
        &mut self,
        id: &str,
        new_date: NaiveDate,
        new_time: NaiveTime,
    ) -> Result<&CalendarEvent, StoreError> {
        let Some(index) = self.index_of(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        tracing::info!(%id, %new_date, %new_time, "event moved");
        let event = &mut self.events[index];
        event.date = new_date;
        event.time = new_time;
        Ok(&self.events[index])
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn validate(draft: &EventDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if draft.duration_minutes == 0 {
        return Err(ValidationError::ZeroDuration);
    }
    Ok(())
}
