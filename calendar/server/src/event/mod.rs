use calendar_core::{Event, normalize_color, parse_event_date};
use chrono::{DateTime, Utc};

use crate::store::{EventStore, StoreError};

pub mod api;

/// Error type for EventService operations.
#[derive(Debug, thiserror::Error)]
pub enum EventServiceError {
    /// Represents an event not found error.
    #[error("Event with ID {0} not found")]
    EventNotFound(u32),
    /// Represents a date the service could not parse.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    /// Represents a persistence error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Fields accepted when creating an event. `title` and `date` are
/// validated as present at the API boundary.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub color: Option<String>,
}

/// Fields accepted when partially updating an event. Absent or empty
/// fields leave the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub color: Option<String>,
}

pub struct EventService<'a> {
    store: &'a EventStore,
}

impl EventService<'_> {
    pub fn new(store: &EventStore) -> EventService {
        EventService { store }
    }

    /// Retrieves the full event collection in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_events(&self) -> Result<Vec<Event>, EventServiceError> {
        Ok(self.store.load().await)
    }

    /// Retrieves events whose date falls within `[start, end]` inclusive.
    /// If either bound is absent the full collection is returned.
    #[tracing::instrument(skip(self))]
    pub async fn get_events_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Event>, EventServiceError> {
        let events = self.store.load().await;
        match (start, end) {
            (Some(start), Some(end)) => Ok(events
                .into_iter()
                .filter(|event| event.date >= start && event.date <= end)
                .collect()),
            _ => Ok(events),
        }
    }

    /// Retrieves a single event by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_event_by_id(&self, id: u32) -> Result<Event, EventServiceError> {
        self.store
            .load()
            .await
            .into_iter()
            .find(|event| event.id == id)
            .ok_or(EventServiceError::EventNotFound(id))
    }

    /// Creates a new event: assigns the next free ID, normalizes the date
    /// to a UTC timestamp, defaults the color, appends and persists.
    ///
    /// IDs are `max(existing) + 1` rather than time-derived, so rapid
    /// successive creates cannot collide.
    #[tracing::instrument(skip(self))]
    pub async fn create_event(&self, new_event: NewEvent) -> Result<Event, EventServiceError> {
        let date = parse_event_date(&new_event.date)
            .map_err(|err| EventServiceError::InvalidDate(err.to_string()))?;

        let mut events = self.store.load().await;
        let id = events.iter().map(|event| event.id).max().unwrap_or(0) + 1;
        let event = Event {
            id,
            title: new_event.title,
            date,
            color: normalize_color(new_event.color),
        };
        events.push(event.clone());
        self.store.save(&events).await?;
        Ok(event)
    }

    /// Merges the supplied fields over the stored event and persists.
    /// Fields that are absent or empty are left unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn update_event_by_id(
        &self,
        id: u32,
        patch: EventPatch,
    ) -> Result<Event, EventServiceError> {
        let mut events = self.store.load().await;
        let event = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EventServiceError::EventNotFound(id))?;

        if let Some(title) = patch.title.filter(|title| !title.is_empty()) {
            event.title = title;
        }
        if let Some(date) = patch.date.filter(|date| !date.is_empty()) {
            event.date = parse_event_date(&date)
                .map_err(|err| EventServiceError::InvalidDate(err.to_string()))?;
        }
        if let Some(color) = patch.color.filter(|color| !color.is_empty()) {
            event.color = color;
        }

        let updated = event.clone();
        self.store.save(&events).await?;
        Ok(updated)
    }

    /// Removes the event with the given ID and persists, returning the
    /// removed record.
    #[tracing::instrument(skip(self))]
    pub async fn delete_event_by_id(&self, id: u32) -> Result<Event, EventServiceError> {
        let mut events = self.store.load().await;
        let index = events
            .iter()
            .position(|event| event.id == id)
            .ok_or(EventServiceError::EventNotFound(id))?;
        let removed = events.remove(index);
        self.store.save(&events).await?;
        Ok(removed)
    }
}
