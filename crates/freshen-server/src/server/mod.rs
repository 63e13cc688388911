mod routes;
pub mod shutdown;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::build_info::BuildInfo;
use crate::errors::ServerError;
use crate::notes::{Note, load_notes};
use crate::render::RELOAD_SCRIPT_PATH;
use crate::types::ServerConfig;

/// Shared, read-only request state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub build: Arc<BuildInfo>,
    pub notes: Arc<Vec<Note>>,
    pub hold: Duration,
    /// Cancelled on shutdown; cuts marker holds short.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        build: BuildInfo,
        notes: Vec<Note>,
        hold: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            build: Arc::new(build),
            notes: Arc::new(notes),
            hold,
            shutdown,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route(RELOAD_SCRIPT_PATH, get(routes::reload_script))
        .route("/healthz", get(routes::healthz))
        .route("/api/build_timestamp/{expected}", get(routes::build_timestamp))
        .route("/api/version/{expected}", get(routes::version))
        .with_state(state)
}

/// Run the server until `shutdown` is cancelled.
///
/// Notes are read once at startup; a missing notes directory is not fatal,
/// a malformed note is.
pub async fn run_server(config: ServerConfig, shutdown: CancellationToken) -> Result<(), ServerError> {
    let notes = load_notes(&config.notes_dir)?;

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;

    let state = AppState::new(BuildInfo::current(), notes, config.hold, shutdown.clone());
    serve_listener(listener, state, shutdown).await
}

/// Serve on an already-bound listener. Used by `run_server` and tests.
pub async fn serve_listener(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    info!(
        event = "server.started",
        addr = %addr,
        build_timestamp = %state.build.build_timestamp,
        version = %state.build.version,
        notes = state.notes.len(),
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!(event = "server.shutdown_completed", addr = %addr);
    Ok(())
}
