//! Benchmarks for the session join and document normalization

use bson::oid::ObjectId;
use bson::{doc, DateTime, Document};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tokio::runtime::Runtime;

use mentor_dashboard::records::normalize_document;
use mentor_dashboard::sessions::{aggregate_sessions, ExportTable};
use mentor_dashboard::store::{MemoryStore, MENTORS, SESSIONS, STARTUPS};

fn seed(runtime: &Runtime, sessions: usize) -> MemoryStore {
    let store = MemoryStore::new();
    let mentors: Vec<ObjectId> = (0..50).map(|_| ObjectId::new()).collect();
    let startups: Vec<ObjectId> = (0..50).map(|_| ObjectId::new()).collect();

    let session_docs: Vec<Document> = (0..sessions)
        .map(|i| {
            doc! {
                "_id": ObjectId::new(),
                "mentor": mentors[i % mentors.len()].to_hex(),
                "startup": startups[i % startups.len()],
                "date": DateTime::from_millis(1_700_000_000_000 + i as i64 * 3_600_000),
                "topic": format!("Topic {i}"),
                "duration": 45,
                "comments": ["first", "second"],
                "mentorSigned": { "signed": (i % 2 == 0) },
            }
        })
        .collect();

    runtime.block_on(async {
        store.insert_many(SESSIONS, session_docs).await;
        store
            .insert_many(
                MENTORS,
                mentors
                    .iter()
                    .map(|id| doc! { "_id": *id, "company": "Acme" })
                    .collect(),
            )
            .await;
        store
            .insert_many(
                STARTUPS,
                startups
                    .iter()
                    .map(|id| doc! { "_id": *id, "name": "Rocket" })
                    .collect(),
            )
            .await;
    });

    store
}

fn bench_aggregation(c: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("session_join");

    for size in [10, 100, 1000] {
        let store = seed(&runtime, size);
        group.bench_with_input(BenchmarkId::new("aggregate", size), &store, |b, store| {
            b.to_async(&runtime)
                .iter(|| async move { black_box(aggregate_sessions(Some(store)).await.unwrap()) });
        });

        let details = runtime
            .block_on(aggregate_sessions(Some(&store)))
            .expect("aggregation");
        group.bench_with_input(BenchmarkId::new("export", size), &details, |b, details| {
            b.iter(|| {
                let table = ExportTable::from_sessions(details).unwrap();
                black_box(table.to_xlsx().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let document = doc! {
        "_id": ObjectId::new(),
        "createdAt": DateTime::now(),
        "team": [
            { "member": ObjectId::new(), "since": DateTime::now() },
            { "member": ObjectId::new(), "since": DateTime::now() },
        ],
        "mentorSigned": { "signed": true, "at": DateTime::now() },
        "profile": { "owner": ObjectId::new(), "tags": ["a", "b", "c"] },
    };

    c.bench_function("normalize_document", |b| {
        b.iter(|| black_box(normalize_document(document.clone())))
    });
}

criterion_group!(benches, bench_aggregation, bench_normalization);
criterion_main!(benches);
