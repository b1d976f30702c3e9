//! Performance benchmarks for search and CSV transfer.
//!
//! These benchmarks measure:
//! - Substring filtering over collections of different sizes
//! - Matching vs non-matching queries
//! - CSV export and parse of a full collection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use contact_book::domain::ContactId;
use contact_book::models::{Contact, ContactDraft};
use contact_book::search::filter;
use contact_book::transfer::{export_to, read_drafts};

/// Build a synthetic collection of `size` contacts.
fn create_contacts(size: usize) -> Vec<Contact> {
    (0..size)
        .map(|i| {
            Contact::from_draft(
                ContactId::generate(),
                &ContactDraft::new(format!("Person {i} Surname{}", i % 97))
                    .with_phone(format!("+44 20 7946 {:04}", i % 10_000))
                    .with_email(format!("person{i}@example{}.com", i % 13))
                    .with_address(format!("{i} High Street\nTown {}", i % 50)),
            )
        })
        .collect()
}

/// Benchmark filtering with a query that matches a small subset.
fn bench_filter_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_size");

    for size in [100, 1_000, 10_000] {
        let contacts = create_contacts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| filter(black_box(contacts), black_box("surname42")));
        });
    }

    group.finish();
}

/// Benchmark the empty query (identity) against a query with no matches.
fn bench_filter_query_kinds(c: &mut Criterion) {
    let contacts = create_contacts(1_000);
    let mut group = c.benchmark_group("filter_query_kinds");

    for (label, query) in [("empty", ""), ("no_match", "zzzz"), ("phone", "7946 00")] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &query, |b, query| {
            b.iter(|| filter(black_box(&contacts), black_box(query)));
        });
    }

    group.finish();
}

/// Benchmark CSV export followed by a parse of the exported bytes.
fn bench_csv_round_trip(c: &mut Criterion) {
    let contacts = create_contacts(1_000);

    c.bench_function("csv_round_trip_1000", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            export_to(&mut buf, black_box(&contacts)).unwrap();
            read_drafts(buf.as_slice()).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_filter_by_size,
    bench_filter_query_kinds,
    bench_csv_round_trip
);
criterion_main!(benches);
