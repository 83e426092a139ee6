//! Error types for the asset cache

use thiserror::Error;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Asset cache error types
#[derive(Error, Debug)]
pub enum CacheError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid store URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Store returned an error
    #[error("Store error: {0}")]
    Store(String),

    /// Fetch declined by the configured skip predicate.
    ///
    /// A policy signal, not a store failure: the store was never contacted.
    #[error("cache skipped for {0}")]
    Skipped(String),
}

impl CacheError {
    /// Whether this failure came from the skip predicate rather than the store.
    pub fn is_skipped(&self) -> bool {
        matches!(self, CacheError::Skipped(_))
    }
}
