use crate::common::{configure_criterion, deep_chain};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;

pub fn bench_fingerprint(c: &mut Criterion) {
    let err = deep_chain(8);

    let mut group = c.benchmark_group("fingerprint");
    group.bench_function("default", |b| b.iter(|| black_box(err.fingerprint())));
    group.bench_function("with_fields", |b| {
        b.iter(|| black_box(err.fingerprint_config().include_fields(true).compute()))
    });
    group.bench_function("hex", |b| b.iter(|| black_box(err.fingerprint_hex())));
    group.finish();
}

criterion_group! {
    name = fingerprint_benches;
    config = configure_criterion();
    targets = bench_fingerprint
}
