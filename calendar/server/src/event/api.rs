use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use calendar_core::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::event::{EventPatch, EventService, EventServiceError, NewEvent};
use crate::store::EventStore;

/// Shared state for the event API handlers.
#[derive(Clone, Debug)]
pub struct EventState {
    pub store: EventStore,
}

/// JSON representation of an Event for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventJson {
    /// Unique identifier for the event
    id: u32,
    /// Title displayed on the calendar
    title: String,
    /// Normalized RFC 3339 timestamp of the event
    date: DateTime<Utc>,
    /// Hex color token from the palette
    color: String,
}

impl From<Event> for EventJson {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date,
            color: event.color,
        }
    }
}

/// Request body for creating an event. `title` and `date` are required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Request body for partially updating an event. Absent fields are left
/// unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Query parameters for the inclusive date-range filter.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RangeQuery {
    #[serde(default, rename = "startDate")]
    start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    end_date: Option<String>,
}

/// Acknowledgment body returned after a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    message: String,
}

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for event API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents a missing or malformed field in the request.
    #[error("{0}")]
    Validation(String),
    /// Represents a request for an event ID with no matching record.
    #[error("Event not found")]
    NotFound,
    /// Represents a persistence failure while applying the change.
    #[error("Event service error")]
    Service(#[source] EventServiceError),
}

impl From<EventServiceError> for ApiError {
    fn from(err: EventServiceError) -> Self {
        match err {
            EventServiceError::EventNotFound(_) => ApiError::NotFound,
            EventServiceError::InvalidDate(_) => ApiError::Validation(err.to_string()),
            err => ApiError::Service(err),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, user_facing_error_message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Event not found".to_string()),
            ApiError::Service(err) => {
                tracing::error!("Event service error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred while processing your request".to_string(),
                )
            }
        };

        (
            status_code,
            Json(ErrorResponse {
                error: user_facing_error_message,
            }),
        )
            .into_response()
    }
}

fn parse_range_bound(input: &str) -> Result<DateTime<Utc>, ApiError> {
    calendar_core::parse_event_date(input)
        .map_err(|_| ApiError::Validation(format!("Invalid date bound: '{input}'")))
}

/// Handler for GET /api/events - returns the full collection.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Full event collection in insertion order", body = Vec<EventJson>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn get_events_handler(
    State(state): State<Arc<EventState>>,
) -> Result<Json<Vec<EventJson>>, ApiError> {
    let service = EventService::new(&state.store);
    let events = service.get_all_events().await?;
    Ok(Json(events.into_iter().map(EventJson::from).collect()))
}

/// Handler for GET /api/events/range - filters by inclusive date range.
/// If either bound is absent the full collection is returned.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/events/range",
    params(
        ("startDate" = Option<String>, Query, description = "Inclusive lower bound (RFC 3339 or YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Inclusive upper bound (RFC 3339 or YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Events within the range", body = Vec<EventJson>),
        (status = 400, description = "Malformed range bound", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn get_events_in_range_handler(
    State(state): State<Arc<EventState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<EventJson>>, ApiError> {
    let (start, end) = match (&query.start_date, &query.end_date) {
        (Some(start), Some(end)) => (Some(parse_range_bound(start)?), Some(parse_range_bound(end)?)),
        _ => (None, None),
    };

    let service = EventService::new(&state.store);
    let events = service.get_events_in_range(start, end).await?;
    Ok(Json(events.into_iter().map(EventJson::from).collect()))
}

/// Handler for GET /api/events/{id} - fetches a single event.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = u32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The matching event", body = EventJson),
        (status = 404, description = "No event has this ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn get_event_handler(
    State(state): State<Arc<EventState>>,
    Path(id): Path<u32>,
) -> Result<Json<EventJson>, ApiError> {
    let service = EventService::new(&state.store);
    let event = service.get_event_by_id(id).await?;
    Ok(Json(EventJson::from(event)))
}

/// Handler for POST /api/events - creates an event.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "The created event", body = EventJson),
        (status = 400, description = "Missing title or date", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn create_event_handler(
    State(state): State<Arc<EventState>>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventJson>), ApiError> {
    let (Some(title), Some(date)) = (
        request.title.filter(|title| !title.trim().is_empty()),
        request.date.filter(|date| !date.trim().is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "Title and date are required".to_string(),
        ));
    };

    let service = EventService::new(&state.store);
    let created = service
        .create_event(NewEvent {
            title,
            date,
            color: request.color,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(EventJson::from(created))))
}

/// Handler for PUT /api/events/{id} - partially updates an event.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = u32, Path, description = "Event ID")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "The updated event", body = EventJson),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 404, description = "No event has this ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn update_event_handler(
    State(state): State<Arc<EventState>>,
    Path(id): Path<u32>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<EventJson>, ApiError> {
    let service = EventService::new(&state.store);
    let updated = service
        .update_event_by_id(
            id,
            EventPatch {
                title: request.title,
                date: request.date,
                color: request.color,
            },
        )
        .await?;
    Ok(Json(EventJson::from(updated)))
}

/// Handler for DELETE /api/events/{id} - removes an event.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = u32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = DeleteResponse),
        (status = 404, description = "No event has this ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn delete_event_handler(
    State(state): State<Arc<EventState>>,
    Path(id): Path<u32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let service = EventService::new(&state.store);
    service.delete_event_by_id(id).await?;
    Ok(Json(DeleteResponse {
        message: "Event deleted successfully".to_string(),
    }))
}

/// Creates and returns the events API router.
///
/// The static `/events/range` route must coexist with `/events/{id}`;
/// axum gives static segments priority so `range` is never parsed as an ID.
pub fn create_api_router(state: Arc<EventState>) -> Router {
    Router::new()
        .route(
            "/events",
            get(get_events_handler).post(create_event_handler),
        )
        .route("/events/range", get(get_events_in_range_handler))
        .route(
            "/events/{id}",
            get(get_event_handler)
                .put(update_event_handler)
                .delete(delete_event_handler),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn error_body(response: axum::response::Response) -> ErrorResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn validation_errors_map_to_bad_request() {
        let error = ApiError::Validation("Title and date are required".to_string());
        let response = axum::response::IntoResponse::into_response(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_body(response).await.error,
            "Title and date are required"
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_json_body() {
        let error = ApiError::from(EventServiceError::EventNotFound(99));
        let response = axum::response::IntoResponse::into_response(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_body(response).await.error, "Event not found");
    }

    #[tokio::test]
    async fn service_errors_map_to_500_with_generic_message() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ApiError::from(EventServiceError::Store(io_error.into()));
        let response = axum::response::IntoResponse::into_response(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error_body(response).await.error,
            "An unexpected error occurred while processing your request"
        );
    }

    #[tokio::test]
    async fn invalid_date_from_service_is_a_validation_error() {
        let error = ApiError::from(EventServiceError::InvalidDate(
            "Unrecognized date format: 'soon'".to_string(),
        ));
        let response = axum::response::IntoResponse::into_response(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
