//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_strata::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`], [`impl_into_cause!`]
//! - **Types**: [`ChainBuilder`], [`ErrorNode`], [`Field`], [`Position`], [`Sentinel`]
//! - **Traits**: [`ResultExt`], [`IntoCause`], [`FieldAware`]
//!
//! # Examples
//!
//! ```
//! use error_strata::prelude::*;
//!
//! fn load_config() -> StrataResult<String> {
//!     Err::<String, _>("file missing").ctx("loading configuration")
//! }
//!
//! assert!(load_config().is_err());
//! ```

// Macros
pub use crate::{fields, impl_into_cause};

// Core types
pub use crate::types::{ChainBuilder, ErrorNode, Field, Position, Sentinel, StrataResult};

// Traits
pub use crate::traits::{FieldAware, IntoCause, ResultExt};
