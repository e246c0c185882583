//! Fixed-shape projection of a joined mentoring session

use bson::oid::ObjectId;
use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use super::error::AggregationError;
use crate::records::format_timestamp;

/// Display name used when a session's mentor cannot be resolved
pub const UNKNOWN_MENTOR: &str = "Compañía Mentor Desconocida";

/// Display name used when a session's startup cannot be resolved
pub const UNKNOWN_STARTUP: &str = "Startup Desconocida";

/// A session joined with its mentor and startup.
///
/// Every field is always present on the wire; absent optional values are
/// `null`, absent comments are `[]` and the signed flags default to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub mentor_id: Option<String>,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    pub startup_id: Option<String>,
    pub startup_company: String,
    pub date: Option<String>,
    pub topic: Option<String>,
    pub duration: Option<i64>,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub comments: Vec<String>,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<String>,
    #[serde(rename = "mentorSigned")]
    pub mentor_signed: bool,
    #[serde(rename = "startupSigned")]
    pub startup_signed: bool,
}

/// Interpret a reference field as an identifier.
///
/// Native identifiers pass through and 24-digit hex strings are parsed.
/// Anything else is not a reference and yields `None`.
pub fn parse_object_id(value: &Bson) -> Option<ObjectId> {
    match value {
        Bson::ObjectId(oid) => Some(*oid),
        Bson::String(s) => ObjectId::parse_str(s).ok(),
        _ => None,
    }
}

/// Whether `n` is an integer inside the `i64` range
fn is_whole_i64(n: f64) -> bool {
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
    n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64
}

fn present<'a>(document: &'a Document, field: &str) -> Option<&'a Bson> {
    match document.get(field) {
        None | Some(Bson::Null) => None,
        Some(value) => Some(value),
    }
}

/// Field-by-field coercion of one session document.
///
/// Carries the session id so every failure names the offending record.
pub(crate) struct Coercer<'a> {
    pub session_id: &'a str,
}

impl Coercer<'_> {
    fn fail(&self, field: &'static str, reason: impl Into<String>) -> AggregationError {
        AggregationError::coercion(self.session_id, field, reason)
    }

    /// First non-null of `fields` in `document`, as a string, else `fallback`
    pub fn display_name(
        &self,
        document: Option<&Document>,
        fields: &[&'static str],
        fallback: &str,
    ) -> Result<String, AggregationError> {
        let Some(document) = document else {
            return Ok(fallback.to_string());
        };

        for &field in fields {
            match present(document, field) {
                None => continue,
                Some(Bson::String(s)) => return Ok(s.clone()),
                Some(other) => {
                    return Err(self.fail(field, format!("expected a string, found {other}")))
                }
            }
        }

        Ok(fallback.to_string())
    }

    pub fn optional_string(
        &self,
        document: &Document,
        field: &'static str,
    ) -> Result<Option<String>, AggregationError> {
        match present(document, field) {
            None => Ok(None),
            Some(Bson::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.fail(field, format!("expected a string, found {other}"))),
        }
    }

    pub fn date(&self, document: &Document) -> Result<Option<String>, AggregationError> {
        match present(document, "date") {
            None => Ok(None),
            Some(Bson::DateTime(timestamp)) => Ok(Some(format_timestamp(timestamp))),
            Some(other) => Err(self.fail("date", format!("expected a timestamp, found {other}"))),
        }
    }

    pub fn duration(&self, document: &Document) -> Result<Option<i64>, AggregationError> {
        match present(document, "duration") {
            None => Ok(None),
            Some(Bson::Int32(n)) => Ok(Some(i64::from(*n))),
            Some(Bson::Int64(n)) => Ok(Some(*n)),
            Some(Bson::Double(n)) if is_whole_i64(*n) => Ok(Some(*n as i64)),
            Some(other) => Err(self.fail(
                "duration",
                format!("expected a whole number, found {other}"),
            )),
        }
    }

    pub fn comments(&self, document: &Document) -> Result<Vec<String>, AggregationError> {
        match present(document, "comments") {
            None => Ok(Vec::new()),
            Some(Bson::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Bson::String(s) => Ok(s.clone()),
                    other => Err(self.fail(
                        "comments",
                        format!("expected only strings, found {other}"),
                    )),
                })
                .collect(),
            Some(other) => Err(self.fail("comments", format!("expected a list, found {other}"))),
        }
    }

    /// The `signed` sub-key of a signature wrapper, `false` when absent
    pub fn signed(
        &self,
        document: &Document,
        field: &'static str,
    ) -> Result<bool, AggregationError> {
        let Some(Bson::Document(wrapper)) = document.get(field) else {
            return Ok(false);
        };

        match present(wrapper, "signed") {
            None => Ok(false),
            Some(Bson::Boolean(signed)) => Ok(*signed),
            Some(other) => Err(self.fail(field, format!("expected a boolean, found {other}"))),
        }
    }
}
