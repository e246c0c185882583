//! # Mentor Dashboard
//!
//! Read-only HTTP backend serving startup, mentor and mentoring-session records
//! from MongoDB to a dashboard frontend, plus a spreadsheet export of sessions.
//!
//! ## Modules
//!
//! - `config` - Runtime settings (connection string, bind address, static files)
//! - `store` - Document store trait, MongoDB and in-memory implementations
//! - `records` - Normalization of store-native values and whole-collection reads
//! - `sessions` - Session join with mentors and startups, spreadsheet export
//! - `server` - axum router, handlers and error responses
pub mod config;
pub mod error;
pub mod records;
pub mod server;
pub mod sessions;
pub mod store;

pub use error::{Error, Result};
