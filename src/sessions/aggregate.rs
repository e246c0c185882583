//! Join of sessions with their mentor and startup records
//!
//! Each session references a mentor and a startup by identifier. The join is
//! null-preserving: a reference that is missing, malformed or dangling leaves
//! the session in the output with fallback display names and no foreign id.

use bson::oid::ObjectId;
use bson::Document;
use std::collections::HashMap;
use tracing::debug;

use super::detail::{parse_object_id, Coercer, SessionDetail, UNKNOWN_MENTOR, UNKNOWN_STARTUP};
use super::error::AggregationError;
use crate::records::id_to_string;
use crate::store::{DocumentStore, StoreError, MENTORS, SESSIONS, STARTUPS};

/// Mentors are shown by affiliation first
const MENTOR_NAME_FIELDS: [&str; 2] = ["company", "name"];

/// Startups are shown by product name first
const STARTUP_NAME_FIELDS: [&str; 2] = ["name", "company"];

/// Documents of one collection keyed by their identifier
struct Lookup {
    by_id: HashMap<ObjectId, Document>,
}

impl Lookup {
    fn new(documents: Vec<Document>) -> Self {
        let mut by_id = HashMap::with_capacity(documents.len());
        for document in documents {
            if let Ok(oid) = document.get_object_id("_id") {
                by_id.entry(oid).or_insert(document);
            }
        }
        Self { by_id }
    }

    /// Resolve the reference held in `session[field]`
    fn resolve(&self, session: &Document, field: &str) -> Option<(ObjectId, &Document)> {
        let oid = session.get(field).and_then(parse_object_id)?;
        self.by_id.get(&oid).map(|document| (oid, document))
    }
}

/// Build every session joined with its mentor and startup, newest first.
///
/// Fails as a whole when a read fails or when any session carries a value
/// that does not fit [`SessionDetail`].
pub async fn aggregate_sessions(
    store: Option<&dyn DocumentStore>,
) -> Result<Vec<SessionDetail>, AggregationError> {
    let store = store.ok_or_else(|| StoreError::unavailable("no database connection"))?;

    let sessions = store.find_all(SESSIONS).await?;
    let mentors = Lookup::new(store.find_all(MENTORS).await?);
    let startups = Lookup::new(store.find_all(STARTUPS).await?);

    debug!(
        "Joining {} sessions against {} mentors and {} startups",
        sessions.len(),
        mentors.by_id.len(),
        startups.by_id.len()
    );

    let mut details = sessions
        .iter()
        .map(|session| project_session(session, &mentors, &startups))
        .collect::<Result<Vec<_>, _>>()?;

    sort_newest_first(&mut details);
    Ok(details)
}

fn project_session(
    session: &Document,
    mentors: &Lookup,
    startups: &Lookup,
) -> Result<SessionDetail, AggregationError> {
    let id = session
        .get("_id")
        .and_then(id_to_string)
        .ok_or_else(|| {
            AggregationError::coercion("<unknown>", "_id", "cannot be rendered as a string")
        })?;
    let c = Coercer { session_id: &id };

    let mentor = mentors.resolve(session, "mentor");
    let startup = startups.resolve(session, "startup");

    Ok(SessionDetail {
        mentor_id: mentor.map(|(oid, _)| oid.to_hex()),
        company_name: c.display_name(
            mentor.map(|(_, doc)| doc),
            &MENTOR_NAME_FIELDS,
            UNKNOWN_MENTOR,
        )?,
        startup_id: startup.map(|(oid, _)| oid.to_hex()),
        startup_company: c.display_name(
            startup.map(|(_, doc)| doc),
            &STARTUP_NAME_FIELDS,
            UNKNOWN_STARTUP,
        )?,
        date: c.date(session)?,
        topic: c.optional_string(session, "topic")?,
        duration: c.duration(session)?,
        summary: c.optional_string(session, "summary")?,
        status: c.optional_string(session, "status")?,
        comments: c.comments(session)?,
        pdf_url: c.optional_string(session, "pdfUrl")?,
        mentor_signed: c.signed(session, "mentorSigned")?,
        startup_signed: c.signed(session, "startupSigned")?,
        id,
    })
}

/// Order by the formatted date string, descending.
///
/// The display format is fixed-width and zero-padded, so string order is
/// chronological. Sessions without a date go last; ties keep store order.
pub fn sort_newest_first(details: &mut [SessionDetail]) {
    details.sort_by(|a, b| b.date.cmp(&a.date));
}
