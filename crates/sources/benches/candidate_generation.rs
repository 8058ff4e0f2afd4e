//! Benchmarks for candidate generation
//!
//! Run with: cargo bench --package sources
//!
//! Uses a synthetic catalog so the benchmark needs no data files.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Catalog, Film, Genre, RatingLabel, User, WatchEntry};
use sources::{user_context::build_user_context, CastSource, GenreSource};
use std::sync::Arc;

fn build_catalog() -> Arc<Catalog> {
    let mut catalog = Catalog::new();

    for i in 0..2_000 {
        catalog.insert_film(Film {
            name: format!("Film {}", i),
            director: format!("Director {}", i % 50),
            cast: format!("Cast {}", i % 80),
            genre: Genre::ALL[i % Genre::ALL.len()],
            imdb: (i % 100) as f64 / 10.0,
        });
    }

    for u in 0..200 {
        let history = (0..40)
            .map(|k| WatchEntry::new(format!("Film {}", (u * 7 + k * 13) % 2_000), RatingLabel::Average))
            .collect();
        catalog.insert_user(User::new(format!("user{}", u), history));
    }

    Arc::new(catalog)
}

fn bench_genre_candidates(c: &mut Criterion) {
    let catalog = build_catalog();
    let genre = GenreSource::new(catalog.clone());

    c.bench_function("genre_get_candidates", |b| {
        b.iter(|| {
            let candidates = genre.get_candidates(black_box(Genre::Drama));
            black_box(candidates.len())
        })
    });
}

fn bench_cast_candidates(c: &mut Criterion) {
    let catalog = build_catalog();
    let cast = CastSource::new(catalog.clone());

    c.bench_function("cast_get_candidates", |b| {
        b.iter(|| {
            let candidates = cast.get_candidates(black_box("Cast 7"));
            black_box(candidates.len())
        })
    });
}

fn bench_build_user_context(c: &mut Criterion) {
    let catalog = build_catalog();
    let user = catalog.find_user("user1").expect("user1 is in the synthetic catalog");

    c.bench_function("build_user_context", |b| {
        b.iter(|| {
            let context = build_user_context(&catalog, black_box(user));
            black_box(context.favorite_genre)
        })
    });
}

criterion_group!(
    benches,
    bench_genre_candidates,
    bench_cast_candidates,
    bench_build_user_context
);
criterion_main!(benches);
