//! Common error types for Noodle Hub

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for Noodle Hub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Noodle Hub crates
#[derive(Error, Debug)]
pub enum Error {
    /// Recipe data file could not be read
    #[error("Recipe data unavailable at {path}: {source}")]
    DataSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recipe data is not a valid JSON recipe list
    #[error("Malformed recipe data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested recipe not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
