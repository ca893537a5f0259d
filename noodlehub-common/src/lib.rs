//! # Noodle Hub Common Library
//!
//! Shared code for the Noodle Hub services:
//! - Recipe model and the static recipe store
//! - Recipe query service (search, type prefix, cooking time, ingredients)
//! - Similar-recipe matching over the noodle vocabulary
//! - Configuration loading
//! - Error types

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod similarity;
pub mod store;
pub mod vocabulary;

pub use error::{Error, Result};
pub use model::Recipe;
pub use query::{query, Criteria, IngredientMatch, TimeBound};
pub use similarity::{classify, find_similar, title_case, Similar};
pub use store::{RecipeSource, RecipeStore};
pub use vocabulary::NOODLE_TYPES;
