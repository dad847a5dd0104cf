// HTTP request handlers
use crate::application::dashboard_view::RetryOutcome;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/refresh", post(refresh))
        .route("/api/dashboard", get(dashboard_json))
        .route("/api/dashboard/stream", get(dashboard_stream))
        .route("/healthz", get(health_check))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render whichever of the three views is current
pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.view.render()))
}

/// Retry / refresh. Ignored while a fetch is already in flight.
pub async fn refresh(State(state): State<AppState>) -> Redirect {
    if state.view.retry() == RetryOutcome::AlreadyLoading {
        tracing::info!(
            state = state.view.current().name(),
            "Refresh requested while a fetch is in flight"
        );
    }
    Redirect::to("/")
}

pub async fn dashboard_json(headers: HeaderMap, State(state): State<AppState>) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    match json_response(&state.view.render(), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn dashboard_stream(State(state): State<AppState>) -> impl IntoResponse {
    stream_from_receiver(state.view.subscribe())
}
