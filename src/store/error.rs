//! Error types for the document store layer

use std::fmt;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// No connection was ever established, or it has been closed
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Connecting or pinging the store failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store rejected or failed a query
    #[error("Query error: {0}")]
    Query(String),

    /// Missing or malformed connection settings
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable<E: fmt::Display>(msg: E) -> Self {
        Self::Unavailable(msg.to_string())
    }

    /// Create a connection error
    pub fn connection<E: fmt::Display>(err: E) -> Self {
        Self::Connection(err.to_string())
    }

    /// Create a query error
    pub fn query<E: fmt::Display>(err: E) -> Self {
        Self::Query(err.to_string())
    }

    /// Create a configuration error
    pub fn configuration<E: fmt::Display>(msg: E) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Check if this error means the store cannot be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_classification() {
        assert!(StoreError::unavailable("never connected").is_unavailable());
        assert!(!StoreError::query("bad pipeline").is_unavailable());
        assert!(!StoreError::connection("ping timed out").is_unavailable());
    }

    #[test]
    fn test_display_carries_cause() {
        let err = StoreError::configuration("DATABASE_URL is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: DATABASE_URL is not set"
        );
    }
}
