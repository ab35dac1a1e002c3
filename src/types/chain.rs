//! Outward-to-inward traversal of a cause chain.

use core::iter::FusedIterator;

use crate::types::error_node::ErrorNode;

/// Lazy iterator over a chain, outermost node first, ending at the root cause.
///
/// The chain is immutable, so cloning the iterator (or calling
/// [`ErrorNode::chain`] again) restarts the walk from the same point.
///
/// # Examples
///
/// ```
/// use error_strata::{ChainBuilder, ErrorNode};
///
/// let err = ChainBuilder::new("outer")
///     .wrap(ErrorNode::from_message("inner"))
///     .unwrap();
///
/// let walk = err.chain();
/// let templates: Vec<_> = walk.clone().map(|node| node.template()).collect();
/// assert_eq!(templates, ["outer", "inner"]);
/// assert_eq!(walk.count(), 2);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a ErrorNode>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(start: &'a ErrorNode) -> Self {
        Self { next: Some(start) }
    }

    /// A walk over no nodes at all.
    #[inline]
    pub const fn empty() -> Self {
        Self { next: None }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorNode;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
