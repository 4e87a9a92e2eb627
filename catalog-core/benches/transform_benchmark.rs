use catalog_core::services::transform::{filter_records, sort_records};
use catalog_core::{BookRecord, FilterType, Person, SortOrder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;

fn create_sample_books() -> Vec<BookRecord> {
    (0..2000u32)
        .map(|i| BookRecord {
            id: i,
            title: format!("Test Book {}", (i * 7919) % 2000),
            authors: vec![Person {
                name: format!("Test Author {}", i % 50),
                birth_year: Some(1700 + (i % 200) as i32),
                death_year: Some(1760 + (i % 200) as i32),
            }],
            translators: Vec::new(),
            languages: vec![if i % 3 == 0 { "fr" } else { "en" }.to_string()],
            subjects: vec![format!("Subject {}", i % 20)],
            bookshelves: Vec::new(),
            copyright: Some(false),
            media_type: "Text".to_string(),
            download_count: ((i * 31) % 5000) as u64,
            release_date: None,
            formats: BTreeMap::new(),
        })
        .collect()
}

fn benchmark_sort(c: &mut Criterion) {
    let books = create_sample_books();

    c.bench_function("sort_descending_popular", |b| {
        b.iter(|| sort_records(black_box(&books), black_box(&SortOrder::DescendingPopular)))
    });

    c.bench_function("sort_alphabetical", |b| {
        b.iter(|| sort_records(black_box(&books), black_box(&SortOrder::Alphabetical)))
    });
}

fn benchmark_filter(c: &mut Criterion) {
    let books = create_sample_books();

    c.bench_function("filter_language", |b| {
        b.iter(|| filter_records(black_box(&books), FilterType::Language, black_box("fr")))
    });

    c.bench_function("filter_author_year", |b| {
        b.iter(|| filter_records(black_box(&books), FilterType::AuthorYear, black_box("1800")))
    });
}

criterion_group!(benches, benchmark_sort, benchmark_filter);
criterion_main!(benches);
