#[macro_use]
extern crate criterion;
extern crate libcomputor;

use criterion::{black_box, Criterion};
use libcomputor::math::{is_perfect_square, sqrt};

const INPUT: [f64; 4] = [2., 25., 1_048_576., 939_841_321.];

fn bench_sqrt(c: &mut Criterion) {
    c.bench_function("sqrt", |b| {
        b.iter(|| {
            for x in INPUT.iter() {
                sqrt(black_box(*x));
            }
        })
    });
}

fn bench_is_perfect_square(c: &mut Criterion) {
    c.bench_function("is_perfect_square", |b| {
        b.iter(|| {
            for x in INPUT.iter() {
                is_perfect_square(black_box(*x));
            }
        })
    });
}

criterion_group!(sqrt_benches, bench_sqrt, bench_is_perfect_square);
criterion_main!(sqrt_benches);
