//! HTTP routes of the agent.
//!
//! ```text
//! GET /?instance=<name>&<probe>=<selection>...  - Run checks, text/plain report line
//! GET /health                                   - Liveness and probe registry
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::error;

use statwatch_monitor::{Aggregator, ProbeKind};

use crate::agent::{answer, snapshot_path, INSTANCE_PARAM};

/// Shared state of the HTTP agent.
#[derive(Debug)]
pub(crate) struct AgentState {
    pub snapshot_dir: PathBuf,
    pub aggregator: Aggregator,
}

impl AgentState {
    pub fn new(snapshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_dir: snapshot_dir.into(),
            aggregator: Aggregator::new(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub probes: Vec<&'static str>,
}

pub(crate) fn create_router(state: Arc<AgentState>) -> Router {
    Router::new()
        .route("/", get(check_instance))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the checks named in the query against one instance.
async fn check_instance(
    State(state): State<Arc<AgentState>>,
    Query(mut params): Query<BTreeMap<String, String>>,
) -> Response {
    let Some(instance) = params.remove(INSTANCE_PARAM) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("missing '{}' parameter", INSTANCE_PARAM),
        )
            .into_response();
    };
    let Some(path) = snapshot_path(&state.snapshot_dir, &instance) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("invalid instance name '{}'", instance),
        )
            .into_response();
    };

    // Probes read the source synchronously.
    let worker = state.clone();
    let outcome =
        tokio::task::spawn_blocking(move || answer(&worker.aggregator, &path, &params)).await;

    match outcome {
        Ok(Ok(answer)) => answer.line.into_response(),
        Ok(Err(err)) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
        Err(err) => {
            error!(instance = %instance, "Check task failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "check task failed").into_response()
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
        probes: ProbeKind::ALL.iter().map(|kind| kind.name()).collect(),
    })
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
