use crate::common::{configure_criterion, package_chain};
use criterion::{criterion_group, Criterion};
use error_strata::{fields, ChainBuilder, ErrorNode, ResultExt};
use std::hint::black_box;
use std::sync::Arc;

pub fn bench_wrap_root(c: &mut Criterion) {
    c.bench_function("wrap/root", |b| {
        b.iter(|| {
            let node = ChainBuilder::new(black_box("cannot find module"))
                .with_field("package_path", "p/q")
                .root();
            black_box(node)
        })
    });
}

pub fn bench_wrap_pruned(c: &mut Criterion) {
    let cause = Arc::new(package_chain());

    c.bench_function("wrap/pruned", |b| {
        b.iter(|| {
            let node = ChainBuilder::new("running build")
                .fields(fields![package_path = "p/q", module = "example.com/m"])
                .wrap(Arc::clone(&cause));
            black_box(node)
        })
    });
}

pub fn bench_wrap_opaque_leaf(c: &mut Criterion) {
    let leaf = Arc::new(ErrorNode::from_message("open /etc/app.toml: permission denied"));

    let mut group = c.benchmark_group("wrap/opaque_leaf");
    group.bench_function("text_heuristic", |b| {
        b.iter(|| {
            ChainBuilder::new("loading config")
                .with_field("path", "/etc/app.toml")
                .wrap(black_box(Arc::clone(&leaf)))
        })
    });
    group.bench_function("structured_only", |b| {
        b.iter(|| {
            ChainBuilder::new("loading config")
                .with_field("path", "/etc/app.toml")
                .text_heuristic(false)
                .wrap(black_box(Arc::clone(&leaf)))
        })
    });
    group.finish();
}

pub fn bench_result_ctx(c: &mut Criterion) {
    c.bench_function("wrap/result_ctx", |b| {
        b.iter(|| {
            let result: Result<(), &str> = Err(black_box("disk full"));
            black_box(result.ctx("saving snapshot"))
        })
    });
}

criterion_group! {
    name = wrap_benches;
    config = configure_criterion();
    targets = bench_wrap_root, bench_wrap_pruned, bench_wrap_opaque_leaf, bench_result_ctx
}
