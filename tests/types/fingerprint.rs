use error_strata::{fields, ChainBuilder, ErrorNode};

fn request_failed(user: &'static str, leaf: &'static str) -> ErrorNode {
    ChainBuilder::new("handling request for {user}")
        .with_field("user", user)
        .kind("request")
        .wrap(ErrorNode::from_message(leaf))
        .unwrap()
}

#[test]
fn same_call_site_different_values_share_fingerprint() {
    let a = request_failed("alice", "timeout after 3s");
    let b = request_failed("bob", "timeout after 5s");

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.to_string(), b.to_string());
}

#[test]
fn fields_can_be_opted_in() {
    let a = request_failed("alice", "timeout");
    let b = request_failed("bob", "timeout");

    assert_ne!(
        a.fingerprint_config().include_fields(true).compute(),
        b.fingerprint_config().include_fields(true).compute()
    );
    assert_eq!(
        a.fingerprint_config().exclude_field_keys(&["user"]).compute(),
        b.fingerprint_config().exclude_field_keys(&["user"]).compute()
    );
    assert_ne!(
        a.fingerprint_config().include_field_keys(&["user"]).compute(),
        b.fingerprint_config().include_field_keys(&["user"]).compute()
    );
}

#[test]
fn leaf_text_can_be_opted_in() {
    let a = request_failed("alice", "timeout");
    let b = request_failed("alice", "refused");

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(
        a.fingerprint_config().include_leaf_text(true).compute(),
        b.fingerprint_config().include_leaf_text(true).compute()
    );
}

#[test]
fn kinds_and_templates_distinguish_chains() {
    let a = ChainBuilder::new("load").kind("io").wrap("x").unwrap();
    let b = ChainBuilder::new("load").kind("net").wrap("x").unwrap();
    let c = ChainBuilder::new("save").kind("io").wrap("x").unwrap();

    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
    assert_eq!(
        a.fingerprint_config().include_kinds(false).compute(),
        b.fingerprint_config().include_kinds(false).compute()
    );
    assert_eq!(
        a.fingerprint_config().include_templates(false).compute(),
        c.fingerprint_config().include_templates(false).compute()
    );
}

#[test]
fn synthesized_layers_do_not_change_fingerprint() {
    let leaf = ChainBuilder::new("boom").with_field("id", 1).root().unwrap();
    let wrapped = ChainBuilder::fields_only()
        .fields(fields![id = 1])
        .wrap(leaf.clone())
        .unwrap();

    assert!(wrapped.is_synthesized());
    assert_eq!(wrapped.fingerprint(), leaf.fingerprint());
}

#[test]
fn hex_form_is_sixteen_digits() {
    let err = request_failed("alice", "timeout");
    let hex = err.fingerprint_hex();

    assert_eq!(hex.len(), 16);
    assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), err.fingerprint());
}
