//! Immutable error layer with an owned cause.
//!
//! This module provides [`ErrorNode`], one layer of context in a cause chain:
//! - A message template that may reference the layer's own fields via `{key}`
//! - An ordered set of [`Field`]s, unique by key
//! - An optional shared cause (the next node inward)
//! - A `synthesized` marker for wraps that contributed nothing after pruning
//!
//! Nodes are produced by [`ChainBuilder`](crate::ChainBuilder) or by adapting a leaf
//! error with [`ErrorNode::from_error`] / [`ErrorNode::from_field_aware`]. There is no
//! mutation after construction, so a chain can be shared across threads freely.

use core::error::Error;
use core::fmt::Write;

use crate::traits::FieldAware;
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::chain::Chain;
use crate::types::field::{Field, FieldValue, Position};
use crate::types::renderer::{ChainFormatter, RenderBuilder};
use crate::types::{template, FieldVec};

mod fingerprint;
mod traits;

pub use fingerprint::FingerprintConfig;

/// Shared handle to the opaque leaf error a root node was adapted from.
pub type LeafSource = Arc<dyn Error + Send + Sync + 'static>;

/// One layer of context in a cause chain.
#[must_use]
#[derive(Debug, Clone)]
pub struct ErrorNode {
    pub(crate) template: Cow<'static, str>,
    pub(crate) fields: FieldVec,
    pub(crate) cause: Option<Arc<ErrorNode>>,
    pub(crate) synthesized: bool,
    /// Template is display text of a leaf error and must not be substituted.
    pub(crate) literal: bool,
    /// Fields of this node are unknown; only its text can signal redundancy.
    pub(crate) opaque: bool,
    pub(crate) kind: Option<&'static str>,
    pub(crate) source: Option<LeafSource>,
}

/// Value an [`ErrorNode::is`] scan looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentinel {
    /// A specific `(key, value)` fact.
    Fact { key: Cow<'static, str>, value: FieldValue },
    /// A kind tag set with [`ChainBuilder::kind`](crate::ChainBuilder::kind).
    Kind(&'static str),
}

impl Sentinel {
    #[inline]
    pub fn fact<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<FieldValue>,
    {
        Self::Fact { key: key.into(), value: value.into() }
    }

    #[inline]
    pub const fn kind(kind: &'static str) -> Self {
        Self::Kind(kind)
    }

    fn matches(&self, node: &ErrorNode) -> bool {
        match self {
            Self::Fact { key, value } => node.fields.iter().any(|field| field.matches(key, value)),
            Self::Kind(kind) => node.kind == Some(*kind),
        }
    }
}

fn display_text<D: core::fmt::Display + ?Sized>(item: &D) -> String {
    let mut text = String::new();
    let _ = write!(text, "{}", item);
    text
}

impl ErrorNode {
    /// Adapts an opaque leaf error into a root node.
    ///
    /// The error exposes no structured fields, so deeper-layer redundancy against it is
    /// judged only by matching proposed values against its message text.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_strata::ErrorNode;
    ///
    /// let root = ErrorNode::from_error(core::fmt::Error);
    /// assert!(root.is_opaque());
    /// assert!(root.cause().is_none());
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let text = display_text(&error);
        Self::leaf(text, FieldVec::new(), true, Some(Arc::new(error) as LeafSource))
    }

    /// Adapts a leaf error that exposes its own structured fields.
    ///
    /// Only the first field for each key is kept.
    pub fn from_field_aware<E>(error: E) -> Self
    where
        E: Error + FieldAware + Send + Sync + 'static,
    {
        let text = display_text(&error);
        let mut fields = FieldVec::new();
        for field in error.fields() {
            if !fields.iter().any(|kept: &Field| kept.key() == field.key()) {
                fields.push(field.clone());
            }
        }
        Self::leaf(text, fields, false, Some(Arc::new(error) as LeafSource))
    }

    /// Creates an opaque root node from plain message text.
    pub fn from_message<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::leaf(message.into(), FieldVec::new(), true, None)
    }

    fn leaf<T>(text: T, fields: FieldVec, opaque: bool, source: Option<LeafSource>) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            template: text.into(),
            fields,
            cause: None,
            synthesized: false,
            literal: true,
            opaque,
            kind: None,
            source,
        }
    }

    /// Returns this layer's message with its own fields substituted, ignoring the cause.
    ///
    /// Normal-position fields the template does not reference are appended as
    /// `(key=value, ...)`. Lead and trail fields are left to the renderer.
    #[must_use]
    pub fn message(&self) -> String {
        let mut out = String::new();
        self.write_message(&mut out, |field| field.position == Position::Normal);
        out
    }

    pub(crate) fn write_message<'a, F>(&'a self, out: &mut String, mut annotate: F)
    where
        F: FnMut(&'a Field) -> bool,
    {
        let base = out.len();
        if self.literal {
            out.push_str(&self.template);
        } else {
            template::substitute(&self.template, |key| self.field(key).map(Field::value), out);
        }
        let has_text = out.len() > base;

        let mut written = 0usize;
        for field in &self.fields {
            if self.references(field.key()) || !annotate(field) {
                continue;
            }
            match (written, has_text) {
                (0, true) => out.push_str(" ("),
                (0, false) => {},
                _ => out.push_str(", "),
            }
            let _ = write!(out, "{}", field);
            written += 1;
        }
        if written > 0 && has_text {
            out.push(')');
        }
    }

    /// Whether the template substitutes `{key}`.
    #[inline]
    pub(crate) fn references(&self, key: &str) -> bool {
        !self.literal && template::references(&self.template, key)
    }

    /// Returns the raw template (or leaf text) of this layer.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the next node inward, or `None` at the root cause.
    #[inline]
    pub fn cause(&self) -> Option<&ErrorNode> {
        self.cause.as_deref()
    }

    /// Returns the shared handle to the cause, for re-wrapping without cloning the chain.
    #[inline]
    pub fn cause_arc(&self) -> Option<&Arc<ErrorNode>> {
        self.cause.as_ref()
    }

    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field on this layer only.
    #[inline]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key() == key)
    }

    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.synthesized
    }

    /// Whether this node's structured facts are unknown (adapted from a plain error).
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    #[inline]
    pub fn kind(&self) -> Option<&'static str> {
        self.kind
    }

    /// Returns the leaf error this node was adapted from, if any.
    #[inline]
    pub fn source_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Downcasts this node's leaf error to a concrete type.
    pub fn downcast_source<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.source.as_deref()?.downcast_ref::<T>()
    }

    /// Scans outward-to-inward for the first leaf error of type `T`.
    pub fn find_source<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.chain().find_map(ErrorNode::downcast_source::<T>)
    }

    /// Iterates this node and its causes, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Number of nodes from this one to the root, inclusive.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Returns the innermost node of the chain.
    pub fn root_cause(&self) -> &ErrorNode {
        let mut node = self;
        while let Some(next) = node.cause() {
            node = next;
        }
        node
    }

    /// Reports whether this node or any ancestor carries `sentinel`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_strata::{ChainBuilder, ErrorNode, Field, Sentinel};
    ///
    /// let err = ChainBuilder::new("stat failed")
    ///     .field(Field::new("path", "/etc/app.toml"))
    ///     .kind("not_found")
    ///     .wrap(ErrorNode::from_message("no such file"))
    ///     .unwrap();
    ///
    /// assert!(err.is(&Sentinel::kind("not_found")));
    /// assert!(err.is(&Sentinel::fact("path", "/etc/app.toml")));
    /// assert!(!err.is(&Sentinel::fact("path", "/tmp")));
    /// ```
    pub fn is(&self, sentinel: &Sentinel) -> bool {
        self.chain().any(|node| sentinel.matches(node))
    }

    /// Returns the outermost value recorded for `key` anywhere in the chain.
    pub fn extract_field(&self, key: &str) -> Option<&FieldValue> {
        self.chain().find_map(|node| node.field(key)).map(Field::value)
    }

    /// Returns the outermost node satisfying `predicate`.
    pub fn extract_node<P>(&self, mut predicate: P) -> Option<&ErrorNode>
    where
        P: FnMut(&ErrorNode) -> bool,
    {
        self.chain().find(|node| predicate(node))
    }

    /// Returns a builder for customizing the rendered chain.
    #[inline]
    pub fn render(&self) -> RenderBuilder<'_> {
        RenderBuilder::new(self)
    }

    /// Renders the chain using a custom formatter.
    #[must_use]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        F: ChainFormatter + ?Sized,
    {
        crate::types::renderer::render_chain(Some(self), formatter)
    }

    /// Generates a stable fingerprint of the chain's structure.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_config().compute()
    }

    /// Generates a hex string representation of the fingerprint.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint_config().compute_hex()
    }

    /// Creates a fingerprint configuration for customizing what is hashed.
    #[must_use]
    pub fn fingerprint_config(&self) -> FingerprintConfig<'_> {
        FingerprintConfig::new(self)
    }
}

impl FieldAware for ErrorNode {
    #[inline]
    fn fields(&self) -> &[Field] {
        &self.fields
    }
}
