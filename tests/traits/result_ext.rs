use error_strata::{ErrorNode, ResultExt};

#[test]
fn ctx_wraps_errors() {
    let result: Result<(), &str> = Err("disk full");
    let err = result.ctx("saving snapshot").unwrap_err();

    assert_eq!(err.to_string(), "saving snapshot: disk full");
    assert_eq!(err.depth(), 2);
}

#[test]
fn ctx_passes_ok_through() {
    let result: Result<u8, &str> = Ok(7);
    assert_eq!(result.ctx("never").unwrap(), 7);
}

#[test]
fn ctx_with_is_lazy() {
    let mut called = false;
    let ok: Result<(), &str> = Ok(());
    let _ = ok.ctx_with(|| {
        called = true;
        String::from("unused")
    });
    assert!(!called);

    let err: Result<(), &str> = Err("eof");
    let err = err.ctx_with(|| format!("reading chunk {}", 4)).unwrap_err();
    assert_eq!(err.to_string(), "reading chunk 4: eof");
}

#[test]
fn ctx_stacks_on_nodes() {
    let err: Result<(), ErrorNode> = Err(ErrorNode::from_message("root"));
    let err = err.ctx("middle").ctx("top").unwrap_err();

    let texts: Vec<_> = err.chain().map(|node| node.message()).collect();
    assert_eq!(texts, ["top", "middle", "root"]);
}
