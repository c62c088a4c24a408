// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use heurist_model::city::{Cities, City};
use heurist_tour::{
    exact::exact_tour,
    monitor::no_op::NoOperationMonitor,
    nearest_neighbor::nearest_neighbor_tour,
    two_opt::{TwoOptEngine, two_opt_improve},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Uniformly random cities in a 1000 x 1000 square, seeded per size.
fn random_cities(n: usize) -> Cities<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FF_EE00 ^ n as u64);
    let cities = (0..n)
        .map(|_| City::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    Cities::new(cities).expect("benchmark instances have at least two cities")
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");
    for n in [16, 64, 256, 1024] {
        let cities = random_cities(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &cities, |b, cities| {
            b.iter(|| nearest_neighbor_tour(black_box(cities)))
        });
    }
    group.finish();
}

fn bench_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt");
    group.sample_size(10);
    for n in [16, 32, 64, 128] {
        let cities = random_cities(n);
        let initial = nearest_neighbor_tour(&cities);
        let mut engine = TwoOptEngine::preallocated(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &initial, |b, initial| {
            b.iter(|| {
                engine.run(
                    black_box(&cities),
                    black_box(initial),
                    &mut NoOperationMonitor::new(),
                )
            })
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_tour");
    group.sample_size(10);
    for n in [6, 8, 9] {
        let cities = random_cities(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cities, |b, cities| {
            b.iter(|| exact_tour(black_box(cities)))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let cities = random_cities(48);
    c.bench_function("nearest_neighbor_then_two_opt_48", |b| {
        b.iter(|| {
            let tour = nearest_neighbor_tour(black_box(&cities));
            two_opt_improve(&cities, &tour)
        })
    });
}

criterion_group!(
    benches,
    bench_nearest_neighbor,
    bench_two_opt,
    bench_exact,
    bench_pipeline
);
criterion_main!(benches);
