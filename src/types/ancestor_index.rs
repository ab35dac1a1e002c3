//! Index of facts already recorded deeper in a cause chain.
//!
//! [`AncestorFieldIndex`] answers "does some ancestor already carry this exact
//! `(key, value)` pair?". Redundancy is keyed on the pair, not the key alone:
//! two layers may legitimately report different values under the same key
//! (for example two distinct file paths).
//!
//! Opaque ancestors (adapted from plain errors) expose no structured fields.
//! Their message text is kept so a proposed value can still be matched as a
//! substring, but only through [`AncestorFieldIndex::contains_textually`].

use crate::types::alloc_type::{BTreeMap, BTreeSet, Vec};
use crate::types::error_node::ErrorNode;
use crate::types::field::{Field, FieldValue};

/// Shortest rendered value eligible for the substring fallback.
///
/// Shorter values (`"1"`, `"ok"`) match almost any message and would suppress
/// facts that were never actually reported.
pub const MIN_TEXTUAL_MATCH_LEN: usize = 3;

/// Query object over every `(key, value)` pair present in a chain.
///
/// # Examples
///
/// ```
/// use error_strata::advanced::AncestorFieldIndex;
/// use error_strata::{ChainBuilder, ErrorNode, Field, FieldValue};
///
/// let inner = ChainBuilder::new("cannot find module")
///     .field(Field::new("package_path", "p/q"))
///     .wrap(ErrorNode::from_message("lookup failed"))
///     .unwrap();
///
/// let index = AncestorFieldIndex::build(Some(&inner));
/// assert!(index.contains("package_path", &FieldValue::from("p/q")));
/// assert!(!index.contains("package_path", &FieldValue::from("x/y")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AncestorFieldIndex<'a> {
    facts: BTreeMap<&'a str, BTreeSet<&'a FieldValue>>,
    opaque_text: Vec<&'a str>,
}

impl<'a> AncestorFieldIndex<'a> {
    /// Creates an empty index.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the chain starting at `cause` and records every fact it carries.
    ///
    /// An absent cause yields an empty index.
    pub fn build(cause: Option<&'a ErrorNode>) -> Self {
        let mut index = Self::new();
        if let Some(cause) = cause {
            for node in cause.chain() {
                index.insert(node);
            }
        }
        index
    }

    /// Records the facts of a single node.
    pub fn insert(&mut self, node: &'a ErrorNode) {
        for field in node.fields() {
            self.facts.entry(field.key()).or_default().insert(field.value());
        }
        if node.is_opaque() && !node.template().is_empty() {
            self.opaque_text.push(node.template());
        }
    }

    /// Whether some indexed node carries exactly `(key, value)` as a structured field.
    pub fn contains(&self, key: &str, value: &FieldValue) -> bool {
        self.facts.get(key).is_some_and(|values| values.contains(value))
    }

    /// Fallback signal: whether `value` appears verbatim in an opaque ancestor's text.
    pub fn contains_textually(&self, value: &FieldValue) -> bool {
        let rendered = value.rendered();
        if rendered.chars().count() < MIN_TEXTUAL_MATCH_LEN {
            return false;
        }
        self.opaque_text.iter().any(|text| text.contains(&*rendered))
    }

    /// Whether `field` repeats a fact an ancestor already supplied.
    ///
    /// Structured facts are always consulted; the textual fallback only when `textual` is set.
    pub fn is_redundant(&self, field: &Field, textual: bool) -> bool {
        self.contains(field.key(), field.value())
            || (textual && self.contains_textually(field.value()))
    }

    /// Values recorded for `key`, in sorted order.
    pub fn values(&self, key: &str) -> impl Iterator<Item = &'a FieldValue> + '_ {
        self.facts.get(key).into_iter().flat_map(|values| values.iter().copied())
    }

    /// Number of distinct `(key, value)` pairs indexed.
    pub fn len(&self) -> usize {
        self.facts.values().map(|values| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
