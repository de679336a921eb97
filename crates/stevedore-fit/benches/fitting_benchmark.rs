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
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use stevedore_fit::{BestFitDecreasing, FirstFit, FirstFitDecreasing, FittingStrategy, NextFit};
use stevedore_model::instance::Instance;

const CAPACITY: i64 = 1_000;

/// Uniform random sizes in `1..=capacity`, fixed seed for reproducibility.
fn random_instance(num_items: usize, seed: u64) -> Instance<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let sizes: Vec<i64> = (0..num_items)
        .map(|_| rng.random_range(1..=CAPACITY))
        .collect();
    Instance::new(sizes, CAPACITY).expect("random sizes are always valid")
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitting_benchmark");

    for &num_items in &[100usize, 1_000, 10_000] {
        let instance = random_instance(num_items, 42);
        group.throughput(Throughput::Elements(num_items as u64));

        group.bench_with_input(
            BenchmarkId::new("next_fit", num_items),
            &instance,
            |b, instance| b.iter(|| NextFit::new().pack(black_box(instance))),
        );
        group.bench_with_input(
            BenchmarkId::new("first_fit", num_items),
            &instance,
            |b, instance| b.iter(|| FirstFit::new().pack(black_box(instance))),
        );
        group.bench_with_input(
            BenchmarkId::new("first_fit_decreasing", num_items),
            &instance,
            |b, instance| b.iter(|| FirstFitDecreasing::new().pack(black_box(instance))),
        );
        group.bench_with_input(
            BenchmarkId::new("best_fit_decreasing", num_items),
            &instance,
            |b, instance| b.iter(|| BestFitDecreasing::new().pack(black_box(instance))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
