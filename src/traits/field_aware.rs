//! Capability for leaf errors that expose structured fields.
//!
//! Errors implementing [`FieldAware`] participate in redundancy detection with
//! exact `(key, value)` facts. Errors that do not are still usable as causes,
//! but only contribute their message text to the fallback substring check.
//!
//! # Examples
//!
//! ```
//! use error_strata::{ChainBuilder, ErrorNode, Field, FieldAware};
//!
//! #[derive(Debug)]
//! struct NotFound {
//!     fields: [Field; 1],
//! }
//!
//! impl core::fmt::Display for NotFound {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str("not found")
//!     }
//! }
//!
//! impl std::error::Error for NotFound {}
//!
//! impl FieldAware for NotFound {
//!     fn fields(&self) -> &[Field] {
//!         &self.fields
//!     }
//! }
//!
//! let leaf = NotFound { fields: [Field::new("path", "a.txt")] };
//! let err = ChainBuilder::new("open failed")
//!     .with_field("path", "a.txt")
//!     .wrap(ErrorNode::from_field_aware(leaf))
//!     .unwrap();
//!
//! assert!(err.fields().is_empty());
//! ```
use crate::types::field::Field;

/// Exposes the structured fields of an error to the redundancy index.
pub trait FieldAware {
    /// Returns the facts this error carries, unique by key.
    fn fields(&self) -> &[Field];
}
