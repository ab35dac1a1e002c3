//! Error chain types and engines.
//!
//! This module provides the data model ([`Field`], [`ErrorNode`]) together with
//! the three pieces that operate on it: the redundancy index, the wrap builder
//! and the renderer.
//!
//! # Examples
//!
//! ```
//! use error_strata::{ChainBuilder, ErrorNode, Field};
//!
//! let err = ChainBuilder::new("reading manifest")
//!     .field(Field::new("path", "Cargo.toml").trail())
//!     .wrap(ErrorNode::from_message("permission denied"))
//!     .unwrap();
//!
//! assert_eq!(err.to_string(), "reading manifest: permission denied: Cargo.toml");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod ancestor_index;
pub mod chain;
pub mod chain_builder;
pub mod error_node;
pub mod field;
pub mod renderer;
pub mod template;

pub use ancestor_index::AncestorFieldIndex;
pub use chain::Chain;
pub use chain_builder::{ChainBuilder, ErrorKind, WrapError};
pub use error_node::{ErrorNode, FingerprintConfig, LeafSource, Sentinel};
pub use field::{Field, FieldValue, Position};
pub use renderer::{ChainFormatter, RenderBuilder, RenderConfig};

/// SmallVec-backed storage for the fields of one layer.
///
/// Uses inline storage for up to 2 fields; most layers attach one or two facts.
pub type FieldVec = SmallVec<[Field; 2]>;

/// Result alias for operations that fail with an error chain.
pub type StrataResult<T> = Result<T, ErrorNode>;

/// Boxed [`ErrorNode`] for reduced stack size.
pub type BoxedErrorNode = alloc_type::Box<ErrorNode>;

/// Result alias with a boxed [`ErrorNode`].
pub type BoxedStrataResult<T> = Result<T, BoxedErrorNode>;
