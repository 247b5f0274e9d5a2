//! Criterion benchmarks for the classifier.
//! Run with:
//!   cargo bench -p sorter --bench classify

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sorter::{Package, assess, classify};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.bench_function("numeric", |b| {
        b.iter(|| classify(black_box(150.0), black_box(50.0), black_box(50.0), black_box(25.0)))
    });
    group.bench_function("text", |b| {
        b.iter(|| classify(black_box("150"), black_box("50"), black_box("50"), black_box("25")))
    });
    group.bench_function("invalid", |b| {
        b.iter(|| classify(black_box(-1.0), black_box("abc"), black_box(50.0), black_box(25.0)))
    });
    group.finish();
}

fn bench_assess(c: &mut Criterion) {
    let package = Package::new(200.0, 200.0, 25.0, 30.0).expect("valid package");
    c.bench_function("assess", |b| b.iter(|| assess(black_box(&package))));
}

criterion_group!(benches, bench_classify, bench_assess);
criterion_main!(benches);
