//! Error types for bosun.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for bosun operations.
///
/// The scoring and similarity algorithms themselves are total functions and
/// never fail; errors only arise at the boundaries where configuration,
/// candidate files, or backlog providers are involved.
#[derive(Error, Debug)]
pub enum Error {
    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
