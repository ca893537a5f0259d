//! UI serving routes
//!
//! Static pages; all data comes from the JSON API.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../ui/index.html");
const RECIPE_HTML: &str = include_str!("../../ui/recipe.html");
const APP_JS: &str = include_str!("../../ui/app.js");

/// GET /
///
/// Homepage grid with search and noodle filter
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /recipes/:id
///
/// Detail page shell; the script reads the id from the path
pub async fn serve_recipe_page() -> Html<&'static str> {
    Html(RECIPE_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
        .into_response()
}
