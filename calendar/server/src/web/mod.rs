use axum::Router;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::event::api::{self, EventState};
use crate::store::EventStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::get_events_handler,
        api::get_events_in_range_handler,
        api::get_event_handler,
        api::create_event_handler,
        api::update_event_handler,
        api::delete_event_handler,
        health_check_handler,
    ),
    tags(
        (name = "Events", description = "Event collection CRUD and range filter"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Liveness indicator returned by the health endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Handler for GET /api/health - static liveness indicator.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Assembles the full application router: the events API and health
/// endpoint under /api, Swagger UI, request tracing and a permissive
/// CORS layer so the browser UI on another origin can call the service.
pub fn create_app(state: Arc<EventState>) -> Router {
    let api_router = Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(api::create_api_router(state));

    Router::new()
        .nest("/api", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Event store service running on http://{}", server_address);

    let store = EventStore::new(&config.data_file);
    store.ensure_data_file().await?;
    tracing::info!("Events data file at {}", store.path().display());

    let state = Arc::new(EventState { store });
    let app = create_app(state);

    axum::serve(listener, app).await?;
    Ok(())
}
