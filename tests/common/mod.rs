//! Shared fixtures for the dashboard integration tests
#![allow(dead_code)]

use axum::body::to_bytes;
use axum::response::{IntoResponse, Response};
use bson::oid::ObjectId;
use bson::{doc, DateTime, Document};
use std::sync::Arc;

use mentor_dashboard::server::AppContext;
use mentor_dashboard::store::{MemoryStore, MENTORS, SESSIONS, STARTUPS};

pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub mentor_id: ObjectId,
    pub startup_id: ObjectId,
}

impl Fixture {
    /// One mentor, one startup, and two sessions on consecutive days
    pub async fn seeded() -> Self {
        let store = Arc::new(MemoryStore::new());
        let mentor_id = ObjectId::new();
        let startup_id = ObjectId::new();

        store
            .insert_many(
                MENTORS,
                vec![doc! {
                    "_id": mentor_id,
                    "name": "Jane",
                    "company": "Acme",
                    "joined": at("2023-06-01T08:00:00Z"),
                }],
            )
            .await;
        store
            .insert_many(
                STARTUPS,
                vec![doc! {
                    "_id": startup_id,
                    "name": "Rocket",
                    "company": "RocketCo",
                    "mentors": [mentor_id],
                }],
            )
            .await;
        store
            .insert_many(SESSIONS, vec![
                session("2024-01-01T09:00:00Z", mentor_id.to_hex(), startup_id, &["ok"]),
                session("2024-01-02T10:00:00Z", mentor_id.to_hex(), startup_id, &["one", "two"]),
            ])
            .await;

        Self {
            store,
            mentor_id,
            startup_id,
        }
    }

    pub fn context(&self) -> AppContext {
        AppContext::new(Some(self.store.clone()), "static")
    }
}

pub fn at(iso: &str) -> DateTime {
    DateTime::parse_rfc3339_str(iso).expect("valid timestamp")
}

pub fn session(date: &str, mentor: String, startup: ObjectId, comments: &[&str]) -> Document {
    doc! {
        "_id": ObjectId::new(),
        "mentor": mentor,
        "startup": startup,
        "date": at(date),
        "topic": "Fundraising",
        "duration": 50,
        "status": "completed",
        "comments": comments.to_vec(),
        "mentorSigned": { "signed": true },
    }
}

pub async fn body_bytes(response: impl IntoResponse) -> (Response, Vec<u8>) {
    let response = response.into_response();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.expect("readable body");
    (
        Response::from_parts(parts, axum::body::Body::empty()),
        bytes.to_vec(),
    )
}

pub async fn body_json(response: impl IntoResponse) -> (Response, serde_json::Value) {
    let (response, bytes) = body_bytes(response).await;
    let json = serde_json::from_slice(&bytes).expect("json body");
    (response, json)
}
