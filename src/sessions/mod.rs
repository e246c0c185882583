//! Mentoring sessions joined with mentors and startups
//!
//! - `detail` - the fixed output shape and per-field coercion
//! - `aggregate` - the sessions -> mentors -> startups join
//! - `export` - spreadsheet rendering of the joined list

pub mod aggregate;
pub mod detail;
pub mod error;
pub mod export;

pub use aggregate::{aggregate_sessions, sort_newest_first};
pub use detail::{parse_object_id, SessionDetail, UNKNOWN_MENTOR, UNKNOWN_STARTUP};
pub use error::{AggregationError, ExportError};
pub use export::{export_filename, Cell, ExportTable, HEADERS, SHEET_NAME, XLSX_CONTENT_TYPE};
