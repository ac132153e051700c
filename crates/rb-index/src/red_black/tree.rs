use std::fmt::{Debug, Display};

use crate::error::TreeError;
use crate::iter::Iter;
use crate::util;

use super::types::RbNode;
use super::util as rb_util;

/// Red-black tree holding a multiset of ordered values.
///
/// Nodes are stored in an arena and addressed by `u32` indices which stay
/// valid until [`clear`](Self::clear). Duplicates are kept and iterate in
/// insertion order.
///
/// ```
/// use rb_index::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for v in [30, 10, 25, 15, 10, 5, 30] {
///     tree.insert(v);
/// }
/// tree.set_iterator_min(Some(9));
/// tree.set_iterator_max(Some(26));
///
/// let values: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(values, vec![10, 10, 15, 25]);
/// ```
#[derive(Clone, Debug)]
pub struct RedBlackTree<T> {
    arena: Vec<RbNode<T>>,
    root: Option<u32>,
    iterator_min: Option<T>,
    iterator_max: Option<T>,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RedBlackTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            iterator_min: None,
            iterator_max: None,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[RbNode<T>] {
        &self.arena
    }

    /// Node at `idx`, or `None` if no such node exists (for example an index
    /// handed out before [`clear`](Self::clear)).
    pub fn node(&self, idx: u32) -> Option<&RbNode<T>> {
        self.arena.get(idx as usize)
    }

    pub fn value(&self, idx: u32) -> Option<&T> {
        self.node(idx).map(|n| &n.v)
    }

    pub fn is_black(&self, idx: u32) -> Option<bool> {
        self.node(idx).map(|n| n.b)
    }

    /// Number of stored values, duplicates included.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Iterator bounds are kept.
    pub fn clear(&mut self) {
        log::debug!("clearing red-black tree of {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    /// Sets the lower bound used by iterators created from now on.
    pub fn set_iterator_min(&mut self, min: Option<T>) {
        log::debug!("iterator lower bound {}", if min.is_some() { "set" } else { "cleared" });
        self.iterator_min = min;
    }

    /// Sets the upper bound used by iterators created from now on.
    pub fn set_iterator_max(&mut self, max: Option<T>) {
        log::debug!("iterator upper bound {}", if max.is_some() { "set" } else { "cleared" });
        self.iterator_max = max;
    }

    pub fn iterator_min(&self) -> Option<&T> {
        self.iterator_min.as_ref()
    }

    pub fn iterator_max(&self) -> Option<&T> {
        self.iterator_max.as_ref()
    }

    /// Rotates `child` above `parent` without recoloring.
    ///
    /// A raw rotation generally breaks the red-black invariants; it is
    /// exposed for inspecting the structure.
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

impl<T: Ord> RedBlackTree<T> {
    /// Inserts `value`, rebalancing as needed, and returns its node index.
    ///
    /// # Panics
    ///
    /// If the tree already holds `u32::MAX + 1` nodes, the most a `u32`
    /// index can address. Use [`try_insert`](Self::try_insert) to get an
    /// error instead.
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
    /// The tree is unchanged in both cases.
    pub fn try_insert(&mut self, value: Option<T>) -> Result<u32, TreeError> {
        let value = value.ok_or(TreeError::NullValue)?;
        let idx = util::next_index(self.arena.len())?;
        self.arena.push(RbNode::new(value));
        self.root = rb_util::insert(&mut self.arena, self.root, idx);
        Ok(idx)
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.arena, self.root, value).is_some()
    }

    /// Like [`contains`](Self::contains); `None` is never contained.
    pub fn contains_opt(&self, value: Option<&T>) -> bool {
        value.is_some_and(|v| self.contains(v))
    }

    /// Ascending iterator limited by the bounds configured right now.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            &self.arena,
            self.root,
            self.iterator_min.as_ref(),
            self.iterator_max.as_ref(),
        )
    }

    /// Ascending iterator over `[min, max]`, ignoring the configured bounds.
    pub fn iter_range<'a>(&'a self, min: Option<&'a T>, max: Option<&'a T>) -> Iter<'a, T> {
        Iter::new(&self.arena, self.root, min, max)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        rb_util::assert_red_black_tree(&self.arena, self.root)
    }
}

impl<T: Display> RedBlackTree<T> {
    /// `"<value>(b)"` or `"<value>(r)"` for the node at `idx`.
    pub fn label(&self, idx: u32) -> Option<String> {
        self.node(idx).map(rb_util::label::<T, RbNode<T>>)
    }
}

impl<T: Debug> RedBlackTree<T> {
    /// Multi-line dump of the whole tree.
    pub fn print(&self) -> String {
        rb_util::print(&self.arena, self.root, "")
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Ord> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
