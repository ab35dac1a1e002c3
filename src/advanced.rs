//! Advanced API level for library authors and power users.
//!
//! This module exposes the building blocks behind [`ChainBuilder`](crate::ChainBuilder) and the
//! renderer. Use these when writing a custom formatter or an external
//! serializer over the chain.

// Redundancy index
pub use crate::types::ancestor_index::{AncestorFieldIndex, MIN_TEXTUAL_MATCH_LEN};

// Storage
pub use crate::types::FieldVec;

// Template handling
pub use crate::types::template::{references, segments, substitute, Segment, Segments};

// Rendering internals
pub use crate::types::renderer::{render_chain, render_segments};

// Fingerprinting and leaf access
pub use crate::types::error_node::{FingerprintConfig, LeafSource};
