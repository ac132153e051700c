//! Bounded ascending iterator.
//!
//! The iterator keeps an explicit stack of pending ancestors: the top of the
//! stack is always the next in-order candidate. The lower bound prunes whole
//! subtrees while the stack is seeded; the upper bound is checked against
//! the top of the stack when values are consumed.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::error::TreeError;
use crate::red_black::RbNode;
use crate::types::ValueNode;

/// Ascending iterator over the values in `[min, max]` (both inclusive,
/// `None` meaning unbounded).
///
/// The bounds are fixed when the iterator is created. The iterator cannot be
/// restarted; ask the tree for a new one instead.
///
/// The iterator borrows the tree, so neither the bounds nor the contents can
/// change while it is alive:
///
/// ```compile_fail
/// use rb_index::RedBlackTree;
///
/// let mut tree: RedBlackTree<i32> = (1..=5).collect();
/// let mut iter = tree.iter();
/// tree.set_iterator_max(Some(2));
/// iter.next();
/// ```
///
/// ```compile_fail
/// use rb_index::RedBlackTree;
///
/// let mut tree: RedBlackTree<i32> = (1..=5).collect();
/// let mut iter = tree.iter();
/// tree.insert(0);
/// iter.next();
/// ```
pub struct Iter<'a, T, N = RbNode<T>> {
    arena: &'a [N],
    min: Option<&'a T>,
    max: Option<&'a T>,
    stack: Vec<u32>,
}

impl<'a, T, N> Iter<'a, T, N>
where
    T: Ord,
    N: ValueNode<T>,
{
    pub(crate) fn new(
        arena: &'a [N],
        root: Option<u32>,
        min: Option<&'a T>,
        max: Option<&'a T>,
    ) -> Self {
        let mut iter = Self {
            arena,
            min,
            max,
            stack: Vec::new(),
        };
        iter.seed(root);
        iter
    }

    /// Pushes the path to the smallest in-range value under `node`.
    ///
    /// A node below `min` is dropped along with its left subtree and the
    /// walk continues in its right subtree.
    fn seed(&mut self, mut node: Option<u32>) {
        let arena = self.arena;
        while let Some(i) = node {
            let n = &arena[i as usize];
            let below_min = self
                .min
                .is_some_and(|min| n.value().cmp(min) == Ordering::Less);
            if below_min {
                node = n.r();
            } else {
                self.stack.push(i);
                node = n.l();
            }
        }
    }

    /// Lower bound captured at construction.
    pub fn lower_bound(&self) -> Option<&'a T> {
        self.min
    }

    /// Upper bound captured at construction.
    pub fn upper_bound(&self) -> Option<&'a T> {
        self.max
    }

    /// Next value without consuming it.
    pub fn peek(&self) -> Option<&'a T> {
        let arena = self.arena;
        let top = arena[*self.stack.last()? as usize].value();
        match self.max {
            Some(max) if top.cmp(max) == Ordering::Greater => None,
            _ => Some(top),
        }
    }

    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Consumes the next value.
    ///
    /// # Errors
    ///
    /// [`TreeError::Exhausted`] when [`has_next`](Self::has_next) is false.
    pub fn try_next(&mut self) -> Result<&'a T, TreeError> {
        if !self.has_next() {
            return Err(TreeError::Exhausted);
        }
        let arena = self.arena;
        let Some(i) = self.stack.pop() else {
            return Err(TreeError::Exhausted);
        };
        let node = &arena[i as usize];
        self.seed(node.r());
        Ok(node.value())
    }
}

impl<'a, T, N> Iterator for Iter<'a, T, N>
where
    T: Ord,
    N: ValueNode<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<'a, T, N> FusedIterator for Iter<'a, T, N>
where
    T: Ord,
    N: ValueNode<T>,
{
}
