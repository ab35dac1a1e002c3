//! Chain rendering with emphasis and redundancy suppression.
//!
//! Output is assembled as:
//! 1. the single lead field (outermost [`Position::Lead`] in the chain), if any
//! 2. each non-synthesized node's message, outermost first
//! 3. trail fields collected from anywhere in the chain, outermost first
//!
//! Each `(key, value)` fact is written at most once. Template prose that
//! substitutes a field always keeps its value, but marks the fact as written so
//! inner layers do not repeat it.

use core::fmt::{self, Display};

use crate::types::alloc_type::{BTreeSet, String, Vec};
use crate::types::error_node::ErrorNode;
use crate::types::field::{Field, FieldValue, Position};

/// Trait for customizing how rendered segments are joined.
pub trait ChainFormatter {
    /// Delimiter placed between consecutive segments.
    fn delimiter(&self) -> &str {
        ": "
    }

    /// Whether unreferenced normal fields are appended to each layer's message.
    fn annotate_fields(&self) -> bool {
        true
    }

    fn join_segments<'a>(&self, segments: impl Iterator<Item = &'a str>) -> String {
        join_flat(self.delimiter(), segments)
    }
}

/// Joins segments on one line with `delimiter`.
fn join_flat<'a>(delimiter: &str, segments: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, segment) in segments.enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(segment);
    }
    out
}

/// Configuration-based chain formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub delimiter: String,
    pub annotate_fields: bool,
    pub cascade: bool,
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { delimiter: ": ".into(), annotate_fields: true, cascade: false, indent: "  ".into() }
    }
}

impl RenderConfig {
    /// One segment per line, each indented one step deeper than the previous.
    #[inline]
    pub fn cascaded() -> Self {
        Self { delimiter: "\n".into(), cascade: true, ..Default::default() }
    }

    /// Messages only; normal fields are not appended.
    #[inline]
    pub fn terse() -> Self {
        Self { annotate_fields: false, ..Default::default() }
    }
}

impl ChainFormatter for RenderConfig {
    fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn annotate_fields(&self) -> bool {
        self.annotate_fields
    }

    fn join_segments<'a>(&self, segments: impl Iterator<Item = &'a str>) -> String {
        if !self.cascade {
            return join_flat(&self.delimiter, segments);
        }

        let mut out = String::new();
        for (i, segment) in segments.enumerate() {
            if i > 0 {
                out.push_str(&self.delimiter);
                for _ in 0..i {
                    out.push_str(&self.indent);
                }
            }
            out.push_str(segment);
        }
        out
    }
}

/// Picks the outermost lead field; ties inside one node go to the first declared.
///
/// A lead whose fact some layer's template substitutes is skipped.
pub(crate) fn lead_field(node: &ErrorNode) -> Option<&Field> {
    let in_prose = |lead: &Field| {
        node.chain().filter(|layer| !layer.is_synthesized()).any(|layer| {
            layer.references(lead.key())
                && layer.field(lead.key()).is_some_and(|field| field.same_fact(lead))
        })
    };

    node.chain()
        .filter(|node| !node.is_synthesized())
        .flat_map(|node| node.fields().iter())
        .filter(|field| field.position() == Position::Lead)
        .find(|field| !in_prose(*field))
}

/// Produces the ordered text segments of a chain.
pub fn render_segments(node: Option<&ErrorNode>, annotate: bool) -> Vec<String> {
    let mut segments = Vec::new();
    let Some(node) = node else {
        return segments;
    };

    let mut written: BTreeSet<(&str, &FieldValue)> = BTreeSet::new();
    let lead = lead_field(node);
    if let Some(lead) = lead {
        written.insert((lead.key(), lead.value()));
        segments.push(lead.value().rendered().into_owned());
    }

    let mut trail = Vec::new();
    for layer in node.chain().filter(|layer| !layer.is_synthesized()) {
        for field in layer.fields() {
            if layer.references(field.key()) {
                written.insert((field.key(), field.value()));
            }
        }

        let mut text = String::new();
        layer.write_message(&mut text, |field| {
            if field.position() == Position::Trail {
                return false;
            }
            if lead.is_some_and(|lead| core::ptr::eq(lead, field)) {
                return false;
            }
            annotate && written.insert((field.key(), field.value()))
        });
        if !text.is_empty() {
            segments.push(text);
        }

        for field in layer.fields() {
            if field.position() == Position::Trail
                && !layer.references(field.key())
                && written.insert((field.key(), field.value()))
            {
                trail.push(field.value().rendered().into_owned());
            }
        }
    }

    segments.extend(trail);
    segments
}

/// Renders a chain with a formatter. Never fails; an absent chain renders empty.
pub fn render_chain<F>(node: Option<&ErrorNode>, formatter: &F) -> String
where
    F: ChainFormatter + ?Sized,
{
    let segments = render_segments(node, formatter.annotate_fields());
    formatter.join_segments(segments.iter().map(String::as_str))
}

/// Builder for customizing chain display output.
pub struct RenderBuilder<'a> {
    pub(crate) node: &'a ErrorNode,
    pub(crate) config: RenderConfig,
}

impl<'a> RenderBuilder<'a> {
    pub fn new(node: &'a ErrorNode) -> Self {
        Self { node, config: RenderConfig::default() }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    pub fn annotate_fields(mut self, annotate: bool) -> Self {
        self.config.annotate_fields = annotate;
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled && self.config.delimiter == ": " {
            self.config.delimiter = "\n".into();
        }
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = RenderConfig::cascaded();
        self
    }

    pub fn terse(mut self) -> Self {
        self.config = RenderConfig::terse();
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }
}

impl Display for RenderBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_chain(Some(self.node), &self.config))
    }
}
