use error_strata::advanced::{AncestorFieldIndex, MIN_TEXTUAL_MATCH_LEN};
use error_strata::{ChainBuilder, ErrorNode, Field, FieldValue};

fn two_paths() -> ErrorNode {
    let inner = ChainBuilder::new("copy source")
        .with_field("path", "/src/a")
        .root()
        .unwrap();
    ChainBuilder::new("copy destination")
        .with_field("path", "/dst/b")
        .wrap(inner)
        .unwrap()
}

#[test]
fn empty_chain_yields_empty_index() {
    let index = AncestorFieldIndex::build(None);

    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert!(!index.contains("path", &FieldValue::from("/src/a")));
}

#[test]
fn redundancy_is_keyed_on_the_pair() {
    let chain = two_paths();
    let index = AncestorFieldIndex::build(Some(&chain));

    assert!(index.contains("path", &FieldValue::from("/src/a")));
    assert!(index.contains("path", &FieldValue::from("/dst/b")));
    assert!(!index.contains("path", &FieldValue::from("/other")));
    assert!(!index.contains("dest", &FieldValue::from("/dst/b")));
    assert_eq!(index.len(), 2);
}

#[test]
fn values_lists_every_value_for_a_key() {
    let chain = two_paths();
    let index = AncestorFieldIndex::build(Some(&chain));

    let values: Vec<_> = index.values("path").filter_map(FieldValue::as_str).collect();
    assert_eq!(values, ["/dst/b", "/src/a"]);
    assert_eq!(index.values("missing").count(), 0);
}

#[test]
fn opaque_text_only_matches_through_fallback() {
    let leaf = ErrorNode::from_message("open /etc/app.toml: permission denied");
    let index = AncestorFieldIndex::build(Some(&leaf));
    let path = Field::new("path", "/etc/app.toml");

    assert!(!index.contains("path", path.value()));
    assert!(index.contains_textually(path.value()));
    assert!(index.is_redundant(&path, true));
    assert!(!index.is_redundant(&path, false));
}

#[test]
fn short_values_never_match_textually() {
    let leaf = ErrorNode::from_message("exit status 1");
    let index = AncestorFieldIndex::build(Some(&leaf));

    assert!(MIN_TEXTUAL_MATCH_LEN > 1);
    assert!(!index.contains_textually(&FieldValue::from(1u8)));
    assert!(!index.contains_textually(&FieldValue::from("1")));
}

#[test]
fn structured_nodes_do_not_feed_the_fallback() {
    let node = ChainBuilder::new("open /etc/app.toml").root().unwrap();
    let index = AncestorFieldIndex::build(Some(&node));

    assert!(!index.contains_textually(&FieldValue::from("/etc/app.toml")));
}

#[test]
fn insert_accumulates_single_nodes() {
    let a = ChainBuilder::new("a").with_field("k", 1).root().unwrap();
    let b = ChainBuilder::new("b").with_field("k", 2).root().unwrap();

    let mut index = AncestorFieldIndex::new();
    index.insert(&a);
    index.insert(&b);

    assert!(index.contains("k", &FieldValue::Int(1)));
    assert!(index.contains("k", &FieldValue::Int(2)));
}
