//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the recipe data cannot be read
    pub status: String,
    pub module: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// "cached" or "reload"
    pub source_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// GET /health
///
/// Always answers 200; a data problem is reported in the body.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;

    let (status, recipe_count, last_error) = match state.source.snapshot().await {
        Ok(store) => ("ok", Some(store.len()), None),
        Err(e) => ("degraded", None, Some(e.to_string())),
    };

    Json(HealthResponse {
        status: status.to_string(),
        module: "noodlehub-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        source_mode: state.source.mode().to_string(),
        recipe_count,
        last_error,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
