//! Tracing integration for error-strata.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-strata = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::traits::IntoCause;
use crate::types::alloc_type::Arc;
use crate::types::renderer::lead_field;
use crate::types::{ChainBuilder, ErrorNode, Field};

/// Key of the field recorded by [`ResultSpanExt`].
pub const SPAN_FIELD: &str = "span";

/// Emits one `ERROR` event describing the whole chain.
///
/// The rendered text is the event message; depth, lead value and fingerprint
/// are recorded as structured fields so a collector does not parse text.
///
/// # Example
///
/// ```rust,ignore
/// use error_strata::tracing_ext::log_error;
///
/// if let Err(err) = load_package(path) {
///     log_error(&err);
/// }
/// ```
pub fn log_error(node: &ErrorNode) {
    let lead = lead_field(node).map(|field| field.value().rendered().into_owned());
    tracing::error!(
        error.depth = node.depth(),
        error.lead = lead.as_deref().unwrap_or(""),
        error.fingerprint = %node.fingerprint_hex(),
        "{}",
        node
    );
}

/// Extension trait for `Result` types to record span context on errors.
pub trait ResultSpanExt<T, E> {
    /// Records the current span name as a trailing `span` field.
    ///
    /// If an inner layer already recorded the same span, the new layer is
    /// pruned to a synthesized node and renders nothing.
    fn with_current_span(self) -> Result<T, ErrorNode>;

    /// Records a specific span's name as a trailing `span` field.
    fn with_span(self, span: &Span) -> Result<T, ErrorNode>;
}

impl<T, E> ResultSpanExt<T, E> for Result<T, E>
where
    E: IntoCause,
{
    fn with_current_span(self) -> Result<T, ErrorNode> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, ErrorNode> {
        self.map_err(|error| span_layer(error.into_cause(), span))
    }
}

/// Builds a field-only layer for `span`, or returns the cause untouched when the
/// span carries no metadata (no subscriber, or a disabled span).
fn span_layer(cause: Arc<ErrorNode>, span: &Span) -> ErrorNode {
    match span.metadata() {
        Some(meta) => ChainBuilder::fields_only()
            .field(Field::new(SPAN_FIELD, meta.name()).trail())
            .assemble(Some(cause)),
        None => Arc::unwrap_or_clone(cause),
    }
}
