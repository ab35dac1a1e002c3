//! Placeholder substitution for layer templates.
//!
//! Templates reference their own fields with `{key}`. Literal braces are written as
//! `{{` and `}}`. A placeholder whose key is not carried by the layer is emitted
//! verbatim, so substitution never fails.

use core::fmt::Write;

use crate::types::alloc_type::String;
use crate::types::field::FieldValue;

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Lazy tokenizer over a template string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Splits `template` into literal text and `{key}` placeholders.
#[inline]
pub fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

fn is_key(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let bytes = rest.as_bytes();
        let first = *bytes.first()?;

        match first {
            b'{' => {
                if bytes.get(1) == Some(&b'{') {
                    self.rest = &rest[2..];
                    return Some(Segment::Literal("{"));
                }
                if let Some(end) = rest[1..].find('}') {
                    let key = &rest[1..1 + end];
                    if is_key(key) {
                        self.rest = &rest[end + 2..];
                        return Some(Segment::Placeholder(key));
                    }
                }
                self.rest = &rest[1..];
                Some(Segment::Literal("{"))
            },
            b'}' => {
                let skip = if bytes.get(1) == Some(&b'}') { 2 } else { 1 };
                self.rest = &rest[skip..];
                Some(Segment::Literal("}"))
            },
            _ => {
                let end = rest.find(['{', '}']).unwrap_or(rest.len());
                self.rest = &rest[end..];
                Some(Segment::Literal(&rest[..end]))
            },
        }
    }
}

/// Returns `true` when `template` contains a `{key}` placeholder.
pub fn references(template: &str, key: &str) -> bool {
    segments(template).any(|segment| segment == Segment::Placeholder(key))
}

/// Writes `template` into `out`, replacing placeholders resolved by `lookup`.
pub fn substitute<'v, F>(template: &str, mut lookup: F, out: &mut String)
where
    F: FnMut(&str) -> Option<&'v FieldValue>,
{
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(key) => match lookup(key) {
                Some(value) => {
                    let _ = write!(out, "{}", value);
                },
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                },
            },
        }
    }
}
