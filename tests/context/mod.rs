use error_strata::{
    context_fn, extract_field, extract_node, fields, render, unwrap_all, wrap, ChainBuilder,
    ErrorKind, FieldValue,
};

#[test]
fn wrap_prunes_and_renders() {
    let inner = wrap("no such file", "open {path}", fields![path = "/etc/app.toml"]).unwrap();
    let outer = wrap(inner, "loading config", fields![path = "/etc/app.toml"]).unwrap();

    assert!(outer.fields().is_empty());
    assert_eq!(render(&outer), "loading config: open /etc/app.toml: no such file");
}

#[test]
fn wrap_rejects_duplicate_keys() {
    let err = wrap("x", "y", fields![a = 1, a = 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateFieldKey);
    assert_eq!(err.key(), Some("a"));
}

#[test]
fn extraction_helpers_agree_with_methods() {
    let err = ChainBuilder::new("connect")
        .kind("net")
        .fields(fields![port = 8080u16])
        .wrap("refused")
        .unwrap();

    assert_eq!(extract_field(&err, "port"), Some(&FieldValue::Uint(8080)));
    assert_eq!(extract_field(&err, "port"), err.extract_field("port"));
    assert!(extract_node(&err, |node| node.kind() == Some("net")).is_some());
    assert_eq!(unwrap_all(&err).count(), 2);
}

#[test]
fn context_fn_is_reusable() {
    let in_sync = context_fn("during sync");

    assert_eq!(in_sync("timeout").to_string(), "during sync: timeout");
    assert_eq!(in_sync("refused").to_string(), "during sync: refused");
}
