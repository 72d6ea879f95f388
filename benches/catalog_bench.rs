//! Benchmarks for Bookshelf sorting, filtering and repository round trips

use bookshelf::query::{filter_books, sort_books, BookFilter, SortKey};
use bookshelf::repository::BookRepository;
use bookshelf::storage::MemoryStorage;
use bookshelf::{Book, FilterMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CATEGORIES: [&str; 4] = ["Crime", "sci-fi", "Fantasy", "drama"];

fn books(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            Book::new(
                format!("Title {}", i),
                format!("Author {}", (i * 7919) % n),
                CATEGORIES[i % CATEGORIES.len()],
                (i % 5).to_string(),
            )
        })
        .collect()
}

fn catalog_benchmarks(c: &mut Criterion) {
    let shelf = books(1_000);

    c.bench_function("sort_by_category_1k", |b| {
        b.iter(|| sort_books(black_box(shelf.clone()), SortKey::Category))
    });

    c.bench_function("sort_by_priority_1k", |b| {
        b.iter(|| sort_books(black_box(shelf.clone()), SortKey::Priority))
    });

    let filter = BookFilter::new("author 1", "fan", "");
    c.bench_function("filter_first_match_1k", |b| {
        b.iter(|| filter_books(black_box(shelf.clone()), &filter, FilterMode::FirstMatch))
    });

    let repository = BookRepository::new(MemoryStorage::new());
    repository.save(&shelf).unwrap();
    c.bench_function("repository_list_1k", |b| {
        b.iter(|| repository.list().unwrap())
    });
}

criterion_group!(benches, catalog_benchmarks);
criterion_main!(benches);
