//! The wrap operation: attach a new layer to a cause, pruning repeated facts.
//!
//! [`ChainBuilder`] collects a template and the fields a layer believes are
//! relevant, then [`wrap`](ChainBuilder::wrap)s a cause. Any proposed field whose
//! `(key, value)` pair an ancestor already carries is dropped unless it is forced
//! (explicitly, or by being marked [`Position::Lead`](crate::Position::Lead)) or the
//! layer's own template substitutes it.
//!
//! # Examples
//!
//! ```
//! use error_strata::{ChainBuilder, ErrorNode, Field};
//!
//! let leaf = ChainBuilder::new("cannot find module")
//!     .field(Field::new("package_path", "p/q"))
//!     .root()
//!     .unwrap();
//!
//! let outer = ChainBuilder::new("unknown import path")
//!     .field(Field::new("package_path", "p/q"))
//!     .wrap(leaf)
//!     .unwrap();
//!
//! assert!(outer.fields().is_empty());
//! assert_eq!(outer.message(), "unknown import path");
//! ```

use core::fmt::{self, Display};

use crate::traits::IntoCause;
use crate::types::alloc_type::{Arc, BTreeSet, Cow};
use crate::types::ancestor_index::AncestorFieldIndex;
use crate::types::error_node::ErrorNode;
use crate::types::field::{Field, FieldValue};
use crate::types::{template, FieldVec};

/// Category of a misuse detected while wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The cause chain already contains the layer being applied, or loops back on itself.
    InvalidChain,
    /// The same key was proposed twice in a single wrap.
    DuplicateFieldKey,
}

impl ErrorKind {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidChain => "invalid chain",
            Self::DuplicateFieldKey => "duplicate field key",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Misuse error returned by [`ChainBuilder::wrap`] and [`ChainBuilder::root`].
///
/// These indicate a defect in the calling code rather than a runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapError {
    kind: ErrorKind,
    key: Option<Cow<'static, str>>,
}

impl WrapError {
    #[inline]
    pub(crate) const fn invalid_chain() -> Self {
        Self { kind: ErrorKind::InvalidChain, key: None }
    }

    #[inline]
    pub(crate) fn duplicate_key(key: Cow<'static, str>) -> Self {
        Self { kind: ErrorKind::DuplicateFieldKey, key: Some(key) }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending key for [`ErrorKind::DuplicateFieldKey`].
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl Display for WrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.key) {
            (ErrorKind::DuplicateFieldKey, Some(key)) => {
                write!(f, "{}: `{}` proposed more than once", self.kind, key)
            },
            (ErrorKind::InvalidChain, _) => {
                write!(f, "{}: cause already contains this layer", self.kind)
            },
            (kind, None) => Display::fmt(kind, f),
        }
    }
}

impl core::error::Error for WrapError {}

/// Builder for one error layer.
///
/// Fields are validated and pruned when the layer is attached, not when they are added.
#[must_use]
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    template: Cow<'static, str>,
    fields: FieldVec,
    kind: Option<&'static str>,
    literal: bool,
    opaque: bool,
    origin: Option<Arc<ErrorNode>>,
    textual: bool,
}

impl ChainBuilder {
    /// Starts a layer with the given message template.
    ///
    /// The template may reference this layer's own fields with `{key}`.
    #[inline]
    pub fn new<T>(template: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            template: template.into(),
            fields: FieldVec::new(),
            kind: None,
            literal: false,
            opaque: false,
            origin: None,
            textual: true,
        }
    }

    /// Starts a layer with no message text of its own, only fields.
    #[inline]
    pub fn fields_only() -> Self {
        Self::new("")
    }

    /// Re-applies an existing node's layer (template, fields, kind) onto a new cause.
    ///
    /// Wrapping fails with [`ErrorKind::InvalidChain`] when the new cause chain
    /// already contains `layer` itself.
    pub fn from_layer(layer: &Arc<ErrorNode>) -> Self {
        Self {
            template: layer.template.clone(),
            fields: layer.fields.clone(),
            kind: layer.kind,
            literal: layer.literal,
            opaque: layer.opaque,
            origin: Some(Arc::clone(layer)),
            textual: true,
        }
    }

    /// Proposes a field for this layer.
    #[inline]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Proposes a normal-position field from a key and value.
    #[inline]
    pub fn with_field<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<FieldValue>,
    {
        self.field(Field::new(key, value))
    }

    /// Proposes several fields in order.
    #[inline]
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.extend(fields);
        self
    }

    /// Tags the layer with a kind that [`Sentinel::Kind`](crate::Sentinel::Kind) can match.
    #[inline]
    pub fn kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Enables or disables the substring fallback against opaque ancestors (default: on).
    #[inline]
    pub fn text_heuristic(mut self, enabled: bool) -> Self {
        self.textual = enabled;
        self
    }

    /// Attaches this layer on top of `cause`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::DuplicateFieldKey`] if two proposed fields share a key.
    /// - [`ErrorKind::InvalidChain`] if the cause chain contains the layer this
    ///   builder was created from, or revisits a node.
    pub fn wrap<C>(self, cause: C) -> Result<ErrorNode, WrapError>
    where
        C: IntoCause,
    {
        self.check_keys()?;
        let cause = cause.into_cause();
        self.check_chain(&cause)?;
        Ok(self.assemble(Some(cause)))
    }

    /// Originates a new root failure with no cause.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DuplicateFieldKey`] if two proposed fields share a key.
    pub fn root(self) -> Result<ErrorNode, WrapError> {
        self.check_keys()?;
        Ok(self.assemble(None))
    }

    fn check_keys(&self) -> Result<(), WrapError> {
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.key()) {
                return Err(WrapError::duplicate_key(field.key.clone()));
            }
        }
        Ok(())
    }

    fn check_chain(&self, cause: &Arc<ErrorNode>) -> Result<(), WrapError> {
        let mut visited = BTreeSet::new();
        let mut current = Some(cause);
        while let Some(node) = current {
            let revisited = !visited.insert(Arc::as_ptr(node) as usize);
            let loops_back = self.origin.as_ref().is_some_and(|origin| Arc::ptr_eq(origin, node));
            if revisited || loops_back {
                return Err(WrapError::invalid_chain());
            }
            current = node.cause_arc();
        }
        Ok(())
    }

    /// Builds the node without misuse checks.
    ///
    /// Callers guarantee unique keys and no origin layer.
    pub(crate) fn assemble(self, cause: Option<Arc<ErrorNode>>) -> ErrorNode {
        let fields: FieldVec = {
            let index = AncestorFieldIndex::build(cause.as_deref());
            let textual = self.textual;
            let text = &self.template;
            let literal = self.literal;
            // A field the template substitutes must stay, or `{key}` would leak into the text.
            self.fields
                .into_iter()
                .filter(|field| {
                    field.is_forced()
                        || (!literal && template::references(text, field.key()))
                        || !index.is_redundant(field, textual)
                })
                .collect()
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            template = %self.template,
            kept = fields.len(),
            "attached error layer"
        );

        let synthesized = fields.is_empty() && self.template.is_empty();

        ErrorNode {
            template: self.template,
            fields,
            cause,
            synthesized,
            literal: self.literal,
            opaque: self.opaque,
            kind: self.kind,
            source: None,
        }
    }
}

impl From<WrapError> for ErrorNode {
    /// Reports a misuse as an opaque root so it can still travel up a [`StrataResult`](crate::StrataResult).
    #[inline]
    fn from(error: WrapError) -> Self {
        ErrorNode::from_error(error)
    }
}
