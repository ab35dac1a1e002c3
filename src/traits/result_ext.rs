//! Extension trait for ergonomic field-free wrapping of `Result` types.
//!
//! This module provides [`ResultExt`], which attaches a message-only layer to an
//! error without an explicit [`ChainBuilder`]. A layer with no proposed fields and
//! no origin cannot hit a misuse error, so these methods are infallible.
//!
//! # Examples
//!
//! ```
//! use error_strata::traits::ResultExt;
//! use error_strata::ErrorNode;
//!
//! fn load() -> Result<String, ErrorNode> {
//!     Err::<String, _>("file missing").ctx("loading configuration")
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.to_string(), "loading configuration: file missing");
//! ```

use crate::traits::IntoCause;
use crate::types::alloc_type::{Cow, String};
use crate::types::{ChainBuilder, ErrorNode};

/// Extension trait for adding a layer to `Result` errors.
pub trait ResultExt<T, E> {
    /// Wraps the error with a static message layer.
    fn ctx<M>(self, template: M) -> Result<T, ErrorNode>
    where
        M: Into<Cow<'static, str>>;

    /// Wraps the error with a lazily built message layer.
    ///
    /// The closure only runs on `Err`.
    fn ctx_with<F>(self, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: IntoCause,
{
    #[inline]
    fn ctx<M>(self, template: M) -> Result<T, ErrorNode>
    where
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|e| ChainBuilder::new(template).assemble(Some(e.into_cause())))
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Result<T, ErrorNode>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ChainBuilder::new(f()).assemble(Some(e.into_cause())))
    }
}
