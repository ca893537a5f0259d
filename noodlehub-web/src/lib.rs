//! noodlehub-web library - recipe browsing service
//!
//! Read-only HTTP API over the static recipe file plus the pages that use it.

use axum::Router;
use chrono::{DateTime, Utc};
use noodlehub_common::RecipeSource;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Recipe collection (cached or reloaded per request)
    pub source: RecipeSource,
    /// Service start time, for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(source: RecipeSource) -> Self {
        Self {
            source,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/recipes", get(api::list_recipes))
        .route("/api/recipes/:id", get(api::get_recipe))
        .route("/api/recipes/:id/similar", get(api::similar_recipes))
        .route("/api/noodle-types", get(api::noodle_types))
        .route("/api/buildinfo", get(api::get_build_info));

    let pages = Router::new()
        .route("/", get(api::serve_index))
        .route("/recipes/:id", get(api::serve_recipe_page))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(pages)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
