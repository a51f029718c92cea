// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for filtering the event listing.
//!
//! Measures the case-insensitive title match over listings of growing size,
//! for a selective query and for the empty query (full set).

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixflow::browser::store::filter_indices;
use pixflow::domain::{Event, EventId};
use std::hint::black_box;

const WORDS: [&str; 8] = [
    "Summer", "Winter", "Gala", "Bash", "Wedding", "Festival", "Night", "Café",
];

fn listing(size: usize) -> Vec<Event> {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    (0..size)
        .map(|i| Event {
            id: EventId::new(format!("e{i}")),
            title: format!(
                "{} {} {i}",
                WORDS[i % WORDS.len()],
                WORDS[(i / WORDS.len()) % WORDS.len()]
            ),
            date: now,
            expires_at: now + Duration::days(15),
            cover_url: format!("https://cdn.example.com/covers/e{i}.jpg"),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_search");

    for size in [100, 1_000, 10_000] {
        let events = listing(size);

        group.bench_with_input(BenchmarkId::new("query", size), &events, |b, events| {
            b.iter(|| black_box(filter_indices(events, black_box("  winter gala "))));
        });

        group.bench_with_input(BenchmarkId::new("empty", size), &events, |b, events| {
            b.iter(|| black_box(filter_indices(events, black_box(""))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
