//! Free-function boundary for building, rendering and inspecting chains.
//!
//! Key features:
//! - [`wrap`] attaches a layer to a cause, pruning facts an ancestor already supplied.
//! - [`render`] produces the final text; it never fails.
//! - [`extract_field`], [`extract_node`] and [`unwrap_all`] give typed access to
//!   the chain for callers (such as a top-level logger) that must not parse text.
//! - [`context_fn`] builds a reusable `map_err` closure for a fixed message.
//!
//! These mirror the methods on [`ErrorNode`] and [`ChainBuilder`]; use whichever
//! reads better at the call site.

use crate::traits::IntoCause;
use crate::types::alloc_type::{Cow, String};
use crate::types::{Chain, ChainBuilder, ErrorNode, Field, FieldValue, WrapError};

/// Wraps `cause` with a new layer made of `template` and `fields`.
///
/// # Arguments
///
/// * `cause` - The error from the call just made
/// * `template` - This layer's message, may reference its own fields as `{key}`
/// * `fields` - Facts this layer believes are relevant
///
/// # Errors
///
/// Returns [`WrapError`] with [`ErrorKind::DuplicateFieldKey`](crate::ErrorKind::DuplicateFieldKey)
/// when `fields` repeats a key.
///
/// # Examples
///
/// ```
/// use error_strata::{fields, render, wrap};
///
/// let inner = wrap("no such file", "open {path}", fields![path = "/etc/app.toml"]).unwrap();
/// let outer = wrap(inner, "loading config", fields![path = "/etc/app.toml"]).unwrap();
///
/// assert!(outer.fields().is_empty());
/// assert_eq!(render(&outer), "loading config: open /etc/app.toml: no such file");
/// ```
pub fn wrap<C, T, I>(cause: C, template: T, fields: I) -> Result<ErrorNode, WrapError>
where
    C: IntoCause,
    T: Into<Cow<'static, str>>,
    I: IntoIterator<Item = Field>,
{
    ChainBuilder::new(template).fields(fields).wrap(cause)
}

/// Renders a chain with the default configuration.
///
/// An absent chain renders as the empty string.
///
/// # Examples
///
/// ```
/// use error_strata::{render, ErrorNode};
///
/// assert_eq!(render(None), "");
/// assert_eq!(render(&ErrorNode::from_message("boom")), "boom");
/// ```
pub fn render<'a, N>(node: N) -> String
where
    N: Into<Option<&'a ErrorNode>>,
{
    crate::types::renderer::render_chain(node.into(), &crate::RenderConfig::default())
}

/// Returns the outermost value recorded for `key`.
///
/// # Examples
///
/// ```
/// use error_strata::{extract_field, fields, wrap, FieldValue};
///
/// let err = wrap("refused", "connect", fields![port = 8080u16]).unwrap();
/// assert_eq!(extract_field(&err, "port"), Some(&FieldValue::Uint(8080)));
/// assert_eq!(extract_field(&err, "host"), None);
/// ```
#[inline]
pub fn extract_field<'a>(node: &'a ErrorNode, key: &str) -> Option<&'a FieldValue> {
    node.extract_field(key)
}

/// Returns the outermost node satisfying `predicate`.
///
/// # Examples
///
/// ```
/// use error_strata::{extract_node, ChainBuilder};
///
/// let err = ChainBuilder::new("stat").kind("fs").wrap("denied").unwrap();
/// let fs = extract_node(&err, |node| node.kind() == Some("fs"));
/// assert_eq!(fs.map(|node| node.template()), Some("stat"));
/// ```
#[inline]
pub fn extract_node<P>(node: &ErrorNode, predicate: P) -> Option<&ErrorNode>
where
    P: FnMut(&ErrorNode) -> bool,
{
    node.extract_node(predicate)
}

/// Iterates the whole chain outward-to-inward, ending at the root cause.
///
/// # Examples
///
/// ```
/// use error_strata::{unwrap_all, traits::ResultExt};
///
/// let err = Err::<(), _>("root").ctx("middle").ctx("top").unwrap_err();
/// let texts: Vec<_> = unwrap_all(&err).map(|node| node.message()).collect();
/// assert_eq!(texts, ["top", "middle", "root"]);
/// ```
#[inline]
pub fn unwrap_all(node: &ErrorNode) -> Chain<'_> {
    node.chain()
}

/// Creates a reusable closure that wraps errors with a fixed message layer.
///
/// # Examples
///
/// ```
/// use error_strata::context_fn;
///
/// let in_sync = context_fn("during sync");
/// let err = in_sync("timeout");
/// assert_eq!(err.to_string(), "during sync: timeout");
/// ```
pub fn context_fn<E, T>(template: T) -> impl Fn(E) -> ErrorNode
where
    E: IntoCause,
    T: Into<Cow<'static, str>> + Clone,
{
    move |error| ChainBuilder::new(template.clone()).assemble(Some(error.into_cause()))
}
