//! HTTP client for the event store service.

use calendar_core::Event;
use serde::Serialize;

/// Base URL of the event store service, overridable at build time.
const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5006",
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("event service responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// Payload for creating a new event.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub color: String,
}

/// Fetches the full event collection.
pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
    let response = reqwest::get(format!("{API_BASE_URL}/api/events")).await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// Creates an event and returns the record with its server-assigned id.
pub async fn create_event(new_event: &NewEvent) -> Result<Event, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{API_BASE_URL}/api/events"))
        .json(new_event)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}
