//! Error types for session aggregation and export

use thiserror::Error;

use crate::store::StoreError;

/// Failure to produce the joined session list
#[derive(Error, Debug)]
pub enum AggregationError {
    /// The store refused one of the reads
    #[error("session aggregation failed: {0}")]
    Store(#[from] StoreError),

    /// A session carried a value that does not fit its output field
    #[error("session {session_id}: field '{field}' {reason}")]
    Coercion {
        session_id: String,
        field: &'static str,
        reason: String,
    },
}

impl AggregationError {
    pub fn coercion(session_id: &str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::Coercion {
            session_id: session_id.to_string(),
            field,
            reason: reason.into(),
        }
    }

    /// Check if the store was never reachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_unavailable())
    }
}

/// Failure to build the spreadsheet export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no sessions to export")]
    Empty,

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
