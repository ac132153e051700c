use thiserror::Error;

/// Errors reported by tree operations.
///
/// Every variant is raised before the tree is touched, so a failed call
/// leaves the structure exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `try_insert` was given no value.
    #[error("cannot insert an absent value")]
    NullValue,
    /// `rotate` was given an absent child or parent.
    #[error("cannot rotate: child or parent node is absent")]
    NullNode,
    /// `rotate` was given two nodes that are not a direct parent/child pair.
    #[error("cannot rotate: node {child} is not a child of node {parent}")]
    NotRelated { child: u32, parent: u32 },
    /// Every `u32` node index is already in use.
    #[error("tree is full: no node index left")]
    CapacityExceeded,
    /// `try_next` was called after the last in-range value.
    #[error("iterator has no more values in range")]
    Exhausted,
}
