//! Layered error context that prunes facts a deeper layer already reported.
//!
//! Each layer of a call chain wraps the error it received with its own message
//! and the fields it believes are relevant. Before a layer is attached, every
//! proposed `(key, value)` fact already present in the cause chain is dropped,
//! so identifiers are not repeated three or four times in the final text.
//! Callers still control *where* a fact appears through position hints.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_strata::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Pruning and emphasis
//!
//! ```
//! use error_strata::{ChainBuilder, Field};
//!
//! let c = ChainBuilder::new("cannot find module")
//!     .field(Field::new("package_path", "p/q"))
//!     .root()
//!     .unwrap();
//!
//! let b = ChainBuilder::new("unknown import path")
//!     .field(Field::new("package_path", "p/q"))
//!     .wrap(c)
//!     .unwrap();
//!
//! let a = ChainBuilder::new("can't load package")
//!     .field(Field::new("package_path", "p/q").lead())
//!     .wrap(b)
//!     .unwrap();
//!
//! assert_eq!(
//!     a.to_string(),
//!     "p/q: can't load package: unknown import path: cannot find module"
//! );
//! ```
//!
//! ## Typed extraction
//!
//! ```
//! use error_strata::{fields, wrap, Sentinel};
//!
//! let err = wrap("connection refused", "dialing upstream", fields![host = "db-1", port = 5432])
//!     .unwrap();
//!
//! assert_eq!(err.extract_field("host").and_then(|v| v.as_str()), Some("db-1"));
//! assert!(err.is(&Sentinel::fact("port", 5432)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-function boundary: wrap, render and extraction
pub mod context;
/// Macros for proposing fields and adapting leaf errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capabilities and extension traits
pub mod traits;
/// Error nodes, fields, and the index/builder/renderer engines
pub mod types;

/// Advanced API level for library authors
pub mod advanced;

/// Tracing integration: structured error events and span fields (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use context::*;
pub use traits::{FieldAware, IntoCause, ResultExt};
pub use types::{
    BoxedErrorNode, BoxedStrataResult, Chain, ChainBuilder, ChainFormatter, ErrorKind, ErrorNode,
    Field, FieldValue, Position, RenderBuilder, RenderConfig, Sentinel, StrataResult, WrapError,
};
