// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP handlers and router.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use runpad_core::ProgramId;
use runpad_engine::RunError;

use crate::state::AppState;

/// Default number of records returned by the history endpoint.
const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
struct RunParams {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    limit: Option<usize>,
}

/// `GET /?path=<id>` — run a registered program.
async fn run_program(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RunParams>,
) -> Response {
    let path = params.path.unwrap_or_default();
    if path.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing 'path' query parameter."})),
        )
            .into_response();
    }

    let id = ProgramId::from(path);
    match state.pipeline.run(&id).await {
        Ok(report) => Json(report).into_response(),
        Err(e @ RunError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// `GET /runs?limit=N` — most recent audit records, oldest first.
async fn run_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let records = state.audit_log.lock().read_all();
    match records {
        Ok(mut records) => {
            let skip = records.len().saturating_sub(limit);
            records.drain(..skip);
            Json(json!({"runs": records})).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to read audit log");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "audit log unavailable"})),
            )
                .into_response()
        }
    }
}

async fn health() -> Response {
    Json(json!({"status": "ok"})).into_response()
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(run_program))
        .route("/runs", get(run_history))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
