#[macro_use]
extern crate criterion;
extern crate libcomputor;

use criterion::{black_box, Criterion};
use libcomputor::math::to_fraction;

const INPUT: [f64; 4] = [0.25, -0.2, 0.333_333_333_333, std::f64::consts::PI];

fn bench_to_fraction(c: &mut Criterion) {
    c.bench_function("to_fraction", |b| {
        b.iter(|| {
            for x in INPUT.iter() {
                to_fraction(black_box(*x)).unwrap();
            }
        })
    });
}

criterion_group!(fraction_benches, bench_to_fraction);
criterion_main!(fraction_benches);
