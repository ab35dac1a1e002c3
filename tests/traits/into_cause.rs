use std::borrow::Cow;
use std::sync::Arc;

use error_strata::{ErrorNode, IntoCause};

#[test]
fn strings_become_opaque_roots() {
    let a = "boom".into_cause();
    let b = String::from("boom").into_cause();
    let c = Cow::Borrowed("boom").into_cause();

    for node in [a, b, c] {
        assert!(node.is_opaque());
        assert_eq!(node.template(), "boom");
        assert!(node.cause().is_none());
    }
}

#[test]
fn arc_conversion_keeps_identity() {
    let node = Arc::new(ErrorNode::from_message("x"));
    let converted = Arc::clone(&node).into_cause();

    assert!(Arc::ptr_eq(&node, &converted));
}

#[test]
fn boxed_node_converts() {
    let boxed = Box::new(ErrorNode::from_message("boxed"));
    assert_eq!(boxed.into_cause().template(), "boxed");
}

#[test]
fn fmt_error_keeps_source() {
    let node = core::fmt::Error.into_cause();
    assert!(node.downcast_source::<core::fmt::Error>().is_some());
}

#[cfg(feature = "std")]
#[test]
fn io_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let node = io.into_cause();

    assert_eq!(node.template(), "missing");
    assert_eq!(
        node.downcast_source::<std::io::Error>().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
}
