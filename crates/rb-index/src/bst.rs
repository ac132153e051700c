//! Unbalanced binary search tree.

use crate::error::TreeError;
use crate::iter::Iter;
use crate::types::BstNode;
use crate::util;

/// Plain binary search tree over an arena of [`BstNode`]s.
///
/// Equal values are kept (the tree is a multiset) and always descend to the
/// right of the value they tie with. Nothing rebalances the tree, so sorted
/// input degenerates into a list.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    arena: Vec<BstNode<T>>,
    root: Option<u32>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    /// Node at `idx`, or `None` if no such node exists.
    pub fn node(&self, idx: u32) -> Option<&BstNode<T>> {
        self.arena.get(idx as usize)
    }

    pub fn value(&self, idx: u32) -> Option<&T> {
        self.node(idx).map(|n| &n.v)
    }

    /// Number of stored values, duplicates included.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        log::debug!("clearing binary search tree of {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    /// Rotates `child` above `parent`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NullNode`] if either index is absent,
    /// [`TreeError::NotRelated`] if the two are not a direct parent/child pair.
    pub fn rotate(&mut self, child: Option<u32>, parent: Option<u32>) -> Result<(), TreeError> {
        self.root = util::rotate(&mut self.arena, self.root, child, parent)?;
        Ok(())
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` and returns the index of its node.
    ///
    /// # Panics
    ///
    /// If the tree already holds `u32::MAX + 1` nodes.
    pub fn insert(&mut self, value: T) -> u32 {
        match self.try_insert(Some(value)) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`insert`](Self::insert), rejecting an absent value.
    ///
    /// # Errors
    ///
    /// [`TreeError::NullValue`] if `value` is `None`,
    /// [`TreeError::CapacityExceeded`] if no index is left for a new node.
    pub fn try_insert(&mut self, value: Option<T>) -> Result<u32, TreeError> {
        let value = value.ok_or(TreeError::NullValue)?;
        let idx = util::next_index(self.arena.len())?;
        self.arena.push(BstNode::new(value));
        self.root = util::insert(&mut self.arena, self.root, idx);
        Ok(idx)
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.arena, self.root, value).is_some()
    }

    /// Like [`contains`](Self::contains); `None` is never contained.
    pub fn contains_opt(&self, value: Option<&T>) -> bool {
        value.is_some_and(|v| self.contains(v))
    }

    /// Ascending iterator over every stored value.
    pub fn iter(&self) -> Iter<'_, T, BstNode<T>> {
        Iter::new(&self.arena, self.root, None, None)
    }
}
