//! Benchmark for the partial! macro.
//!
//! Measures the overhead of calling through a reduced closure compared
//! with calling the original function directly and with a hand-written
//! closure.

use applique::partial;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn weigh(a: u64, b: u64, c: u64, d: u64) -> u64 {
    a * 1000 + b * 100 + c * 10 + d
}

fn benchmark_copy_arguments(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_copy_arguments");

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| weigh(black_box(1), black_box(2), black_box(3), black_box(4)));
    });

    group.bench_function("hand_written_closure", |bencher| {
        let bound = |b: u64, d: u64| weigh(1, b, 3, d);
        bencher.iter(|| bound(black_box(2), black_box(4)));
    });

    group.bench_function("partial_macro", |bencher| {
        let bound = partial!(weigh, 1, __, 3, __);
        bencher.iter(|| bound(black_box(2), black_box(4)));
    });

    group.finish();
}

fn benchmark_clone_heavy_arguments(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_clone_arguments");

    fn render(header: String, body: &str) -> usize {
        header.len() + body.len()
    }

    // The fixed String is cloned on every call; measure that cost against
    // an explicit clone in a hand-written closure.
    group.bench_function("hand_written_clone", |bencher| {
        let header = String::from("content-type: text/plain");
        let bound = move |body: &str| render(header.clone(), body);
        bencher.iter(|| bound(black_box("hello")));
    });

    group.bench_function("partial_macro_clone", |bencher| {
        let bound = partial!(render, String::from("content-type: text/plain"), __);
        bencher.iter(|| bound(black_box("hello")));
    });

    group.finish();
}

fn benchmark_binding_site(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_binding_site");

    // Creating the reduced closure itself should be nothing more than
    // moving the fixed values into place.
    group.bench_function("bind_two_of_four", |bencher| {
        bencher.iter(|| {
            let bound = partial!(weigh, black_box(1), __, black_box(3), __);
            black_box(bound(2, 4))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_copy_arguments,
    benchmark_clone_heavy_arguments,
    benchmark_binding_site
);
criterion_main!(benches);
