//! HTTP API handlers for noodlehub-web

pub mod buildinfo;
pub mod health;
pub mod recipes;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use recipes::{get_recipe, list_recipes, noodle_types, similar_recipes};
pub use ui::{serve_app_js, serve_index, serve_recipe_page};
