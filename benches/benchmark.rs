use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use relnorm::closure::attribute_closure;
use relnorm::construct::{AttributeSet, Fd};
use relnorm::cover::minimal_cover;
use relnorm::keys::candidate_keys;

// A chain A0 -> A1 -> ... -> An-1 keeps every algorithm busy: closures walk
// the whole chain one fixpoint round per link, and the key search has many
// reduction orders to explore before the head remains.
fn chain(n: usize) -> Vec<Fd> {
    (1..n)
        .map(|i| Fd::new(AttributeSet::single(i - 1), AttributeSet::single(i)))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for n in [8, 16, 24, 30] {
        let fds = chain(n);
        let seed = AttributeSet::single(0);
        c.bench_function(&format!("closure chain {n}"), |b| {
            b.iter(|| attribute_closure(black_box(seed), &fds))
        });
    }
    for n in [8, 16, 24, 30] {
        let fds = chain(n);
        c.bench_function(&format!("minimal cover chain {n}"), |b| {
            b.iter(|| minimal_cover(black_box(&fds)))
        });
    }
    for n in [4, 8, 12, 16] {
        let fds = chain(n);
        let universe = AttributeSet::full(n);
        c.bench_function(&format!("candidate keys chain {n}"), |b| {
            b.iter(|| candidate_keys(black_box(universe), &fds))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
