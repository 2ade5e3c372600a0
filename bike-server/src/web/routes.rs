//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use tower_http::services::ServeDir;

use super::dto::{HealthResponse, MarkerDto};
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/markers", get(markers))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Map page.
async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        center_lat: state.map.center_lat,
        center_lng: state.map.center_lng,
        zoom: state.map.zoom,
        refresh_secs: state.map.refresh_secs,
    }
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        markers: state.store.len().await,
        last_applied: state.store.last_applied().await.map(|t| t.to_rfc3339()),
    })
}

/// Current markers, in snapshot order.
async fn markers(State(state): State<AppState>) -> Json<Vec<MarkerDto>> {
    let markers = state.store.current_markers().await;
    Json(markers.iter().map(MarkerDto::from).collect())
}
