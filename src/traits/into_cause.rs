//! Trait for converting values into the cause of a new layer.
//!
//! # Implementations
//!
//! The trait is implemented for:
//! - [`ErrorNode`], `Arc<ErrorNode>`, `Box<ErrorNode>` - used as-is
//! - `&'static str`, `String`, `Cow<'static, str>` - an opaque root with that text
//! - `core::fmt::Error` and, with `std`, `std::io::Error` - an opaque root
//!
//! # Examples
//!
//! ```
//! use error_strata::traits::IntoCause;
//!
//! let cause = "connection reset".into_cause();
//! assert!(cause.is_opaque());
//! assert_eq!(cause.message(), "connection reset");
//! ```
use crate::types::alloc_type::{Arc, Box, Cow, String};
use crate::types::error_node::ErrorNode;

/// Converts a type into a shared [`ErrorNode`] usable as a cause.
///
/// # Implementing for Custom Types
///
/// 1. Use the [`impl_into_cause!`](crate::impl_into_cause) macro:
///    ```ignore
///    impl_into_cause!(MyError);
///    impl_into_cause!(MyFieldAwareError, field_aware);
///    ```
///
/// 2. Implement the trait manually:
///    ```
///    use std::sync::Arc;
///    use error_strata::{traits::IntoCause, ChainBuilder, ErrorNode};
///
///    struct Timeout { millis: u64 }
///
///    impl IntoCause for Timeout {
///        fn into_cause(self) -> Arc<ErrorNode> {
///            let node = ChainBuilder::new("timed out after {millis}ms")
///                .with_field("millis", self.millis)
///                .root()
///                .unwrap_or_else(|_| ErrorNode::from_message("timed out"));
///            Arc::new(node)
///        }
///    }
///    ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as the cause of an error layer",
    label = "this type does not implement `IntoCause`",
    note = "implement `IntoCause` manually or use `impl_into_cause!({Self})` macro"
)]
pub trait IntoCause {
    /// Converts `self` into a shared node.
    fn into_cause(self) -> Arc<ErrorNode>;
}

impl IntoCause for ErrorNode {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::new(self)
    }
}

impl IntoCause for Arc<ErrorNode> {
    /// Identity conversion; keeps the node's identity for cycle checks.
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        self
    }
}

impl IntoCause for Box<ErrorNode> {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::from(self)
    }
}

impl IntoCause for &'static str {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::new(ErrorNode::from_message(self))
    }
}

impl IntoCause for String {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::new(ErrorNode::from_message(self))
    }
}

impl IntoCause for Cow<'static, str> {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::new(ErrorNode::from_message(self))
    }
}

impl IntoCause for core::fmt::Error {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::new(ErrorNode::from_error(self))
    }
}

#[cfg(feature = "std")]
impl IntoCause for std::io::Error {
    #[inline]
    fn into_cause(self) -> Arc<ErrorNode> {
        Arc::new(ErrorNode::from_error(self))
    }
}
