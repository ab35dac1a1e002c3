use error_strata::advanced::{references, segments, substitute, Segment};
use error_strata::FieldValue;

#[test]
fn splits_literals_and_placeholders() {
    let parts: Vec<_> = segments("open {path}: {reason}").collect();

    assert_eq!(
        parts,
        vec![
            Segment::Literal("open "),
            Segment::Placeholder("path"),
            Segment::Literal(": "),
            Segment::Placeholder("reason"),
        ]
    );
}

#[test]
fn doubled_braces_are_literal() {
    let parts: Vec<_> = segments("{{path}}").collect();

    assert_eq!(
        parts,
        vec![Segment::Literal("{"), Segment::Literal("path"), Segment::Literal("}")]
    );
}

#[test]
fn malformed_placeholders_stay_literal() {
    let mut out = String::new();
    substitute("set {a b} to {", |_| None, &mut out);

    assert_eq!(out, "set {a b} to {");
}

#[test]
fn unknown_keys_are_left_verbatim() {
    let value = FieldValue::from("p/q");
    let mut out = String::new();
    substitute(
        "package {package_path} at {version}",
        |key| (key == "package_path").then_some(&value),
        &mut out,
    );

    assert_eq!(out, "package p/q at {version}");
}

#[test]
fn references_only_matches_whole_placeholders() {
    assert!(references("open {path}", "path"));
    assert!(!references("open {path}", "pat"));
    assert!(!references("open {{path}}", "path"));
}
