use crate::common::{configure_criterion, deep_chain};
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_strata::advanced::AncestorFieldIndex;
use error_strata::{fields, render, ChainBuilder};
use std::hint::black_box;
use std::sync::Arc;

pub fn bench_wrap_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/wrap_depth");

    for depth in [1, 5, 10, 20, 50] {
        let cause = Arc::new(deep_chain(depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &cause, |b, cause| {
            b.iter(|| {
                ChainBuilder::new("top")
                    .fields(fields![request_id = "req-7f3a", user = "alice"])
                    .wrap(Arc::clone(cause))
            })
        });
    }

    group.finish();
}

pub fn bench_index_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/index_build");

    for depth in [1, 5, 10, 20, 50] {
        let err = deep_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(AncestorFieldIndex::build(Some(err)).len()))
        });
    }

    group.finish();
}

pub fn bench_render_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/render_depth");

    for depth in [1, 5, 10, 20, 50] {
        let err = deep_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(render(err)))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_wrap_depth_scaling, bench_index_depth_scaling, bench_render_depth_scaling
}
