//! Conversion of store-native values into display-safe values
//!
//! Identifiers become their hex strings, timestamps become
//! `YYYY-MM-DD HH:MM:SS` strings and signature wrappers such as
//! `{"signed": true, "signedAt": ...}` collapse into plain booleans. Every
//! `_id` is rendered as a string whatever its stored type. The rules apply at
//! every nesting depth.

use bson::{Bson, Document};
use chrono::DateTime;

/// Display format for every timestamp leaving the service
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields holding a `{ signed: bool, .. }` wrapper
pub const SIGNATURE_FIELDS: [&str; 2] = ["mentorSigned", "startupSigned"];

/// Render a store timestamp in the fixed display format.
///
/// No zone conversion is applied: the store keeps UTC and the dashboard shows
/// it as-is.
pub fn format_timestamp(timestamp: &bson::DateTime) -> String {
    match DateTime::from_timestamp_millis(timestamp.timestamp_millis()) {
        Some(utc) => utc.format(DISPLAY_FORMAT).to_string(),
        // Outside chrono's range; fall back to the driver's own rendering
        None => timestamp.to_string(),
    }
}

/// Value of the `signed` key of a signature wrapper, `false` unless it is `true`
pub fn signed_flag(wrapper: &Document) -> bool {
    matches!(wrapper.get("signed"), Some(Bson::Boolean(true)))
}

/// String form of an identifier-like value, `None` for containers and null
pub fn id_to_string(value: &Bson) -> Option<String> {
    match value {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        Bson::Decimal128(n) => Some(n.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_signature_field(key: &str) -> bool {
    SIGNATURE_FIELDS.contains(&key)
}

/// Normalize every field of a document.
pub fn normalize_document(document: Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| {
            let value = normalize_field(&key, value);
            (key, value)
        })
        .collect()
}

fn normalize_field(key: &str, value: Bson) -> Bson {
    if key == "_id" {
        if let Some(id) = id_to_string(&value) {
            return Bson::String(id);
        }
    }

    match value {
        Bson::Document(inner) if is_signature_field(key) && inner.contains_key("signed") => {
            Bson::Boolean(signed_flag(&inner))
        }
        Bson::Document(inner) => Bson::Document(normalize_document(inner)),
        other => normalize_value(other),
    }
}

fn normalize_value(value: Bson) -> Bson {
    match value {
        Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
        Bson::DateTime(timestamp) => Bson::String(format_timestamp(&timestamp)),
        Bson::Document(inner) => Bson::Document(normalize_document(inner)),
        Bson::Array(items) => Bson::Array(items.into_iter().map(normalize_value).collect()),
        other => other,
    }
}

/// Convert a normalized document to JSON for the HTTP boundary.
pub fn document_to_json(document: Document) -> serde_json::Value {
    Bson::Document(document).into_relaxed_extjson()
}
