//! Capabilities and extension traits.
//!
//! - [`FieldAware`]: leaf errors that expose structured fields to the redundancy index
//! - [`IntoCause`]: conversion of errors and messages into a cause node
//! - [`ResultExt`]: field-free wrapping directly on `Result`
//!
//! # Examples
//!
//! ```
//! use error_strata::traits::{IntoCause, ResultExt};
//!
//! let node = "disk full".into_cause();
//! assert_eq!(node.depth(), 1);
//!
//! let wrapped = Err::<(), _>("disk full").ctx("saving snapshot").unwrap_err();
//! assert_eq!(wrapped.depth(), 2);
//! ```

pub mod field_aware;
pub mod into_cause;
pub mod result_ext;

pub use field_aware::FieldAware;
pub use into_cause::IntoCause;
pub use result_ext::ResultExt;
