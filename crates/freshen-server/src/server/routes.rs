use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use freshen_core::VersionMarker;
use tracing::debug;

use super::AppState;
use crate::render::{RELOAD_SCRIPT, render_index};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.notes, &state.build))
}

pub async fn reload_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        RELOAD_SCRIPT,
    )
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn build_timestamp(
    State(state): State<AppState>,
    Path(expected): Path<String>,
) -> Response {
    marker_response(&state, VersionMarker::BuildTimestamp, &expected).await
}

pub async fn version(State(state): State<AppState>, Path(expected): Path<String>) -> Response {
    marker_response(&state, VersionMarker::Version, &expected).await
}

/// Answer with the current token.
///
/// A client that already has the current token is held for `state.hold`
/// (or until shutdown) before the answer goes out.
async fn marker_response(state: &AppState, marker: VersionMarker, expected: &str) -> Response {
    let current = state.build.token(marker);

    if current.as_str() == expected && !state.hold.is_zero() {
        debug!(event = "server.marker.hold_started", marker = %marker, token = %current);
        tokio::select! {
            _ = tokio::time::sleep(state.hold) => {}
            _ = state.shutdown.cancelled() => {
                debug!(event = "server.marker.hold_interrupted", marker = %marker);
            }
        }
    }

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        current.into_inner(),
    )
        .into_response()
}
