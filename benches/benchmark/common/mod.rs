use criterion::Criterion;
use error_strata::{fields, ChainBuilder, ErrorNode, Field};
use std::time::Duration;

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}

/// The three-layer package loading chain, with the package path reported at every level.
pub fn package_chain() -> ErrorNode {
    let c = ChainBuilder::new("cannot find module")
        .with_field("package_path", "p/q")
        .root()
        .unwrap();
    let b = ChainBuilder::new("unknown import path")
        .fields(fields![package_path = "p/q", module = "example.com/m"])
        .wrap(c)
        .unwrap();
    ChainBuilder::new("can't load package")
        .field(Field::new("package_path", "p/q").lead())
        .wrap(b)
        .unwrap()
}

/// Builds a chain of `depth` layers, each proposing the shared request id plus one fact of its own.
pub fn deep_chain(depth: usize) -> ErrorNode {
    let mut err = ChainBuilder::new("connection reset")
        .fields(fields![request_id = "req-7f3a", host = "db-1"])
        .root()
        .unwrap();

    for i in 0..depth {
        err = ChainBuilder::new("layer {layer}")
            .fields(fields![layer = i, request_id = "req-7f3a", @trail attempt = i % 3])
            .wrap(err)
            .unwrap();
    }
    err
}
