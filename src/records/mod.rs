//! Startup and mentor records as served to the dashboard

pub mod normalize;
pub mod reader;

pub use normalize::{
    document_to_json, format_timestamp, id_to_string, normalize_document, signed_flag,
    DISPLAY_FORMAT, SIGNATURE_FIELDS,
};
pub use reader::read_collection;
