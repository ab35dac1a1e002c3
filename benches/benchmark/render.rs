use crate::common::{configure_criterion, deep_chain, package_chain};
use criterion::{criterion_group, Criterion};
use error_strata::render;
use std::hint::black_box;

pub fn bench_render_default(c: &mut Criterion) {
    let err = package_chain();
    c.bench_function("render/default", |b| b.iter(|| black_box(render(black_box(&err)))));
}

pub fn bench_render_configs(c: &mut Criterion) {
    let err = deep_chain(8);

    let mut group = c.benchmark_group("render/config");
    group.bench_function("terse", |b| b.iter(|| black_box(err.render().terse().to_string())));
    group.bench_function("cascaded", |b| {
        b.iter(|| black_box(err.render().cascaded().to_string()))
    });
    group.bench_function("delimiter", |b| {
        b.iter(|| black_box(err.render().with_delimiter(" <- ").to_string()))
    });
    group.finish();
}

criterion_group! {
    name = render_benches;
    config = configure_criterion();
    targets = bench_render_default, bench_render_configs
}
