//! Collection traits that callers program against.
//!
//! A loader or a menu only needs to insert values, test membership and walk
//! a bounded ascending range; these traits capture exactly that, so callers
//! can swap the balanced tree for the plain one (or a test double).

use crate::bst::BinarySearchTree;
use crate::error::TreeError;
use crate::iter::Iter;
use crate::red_black::RedBlackTree;

/// A sorted multiset.
pub trait SortedCollection<T: Ord> {
    fn insert(&mut self, value: T);

    /// Inserts `value`, rejecting `None` without touching the collection.
    fn try_insert(&mut self, value: Option<T>) -> Result<(), TreeError> {
        let value = value.ok_or(TreeError::NullValue)?;
        self.insert(value);
        Ok(())
    }

    fn contains(&self, value: &T) -> bool;

    /// Number of stored values, duplicates included.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn clear(&mut self);
}

/// A sorted multiset that can be walked in ascending order between
/// configurable inclusive bounds.
pub trait IterableSortedCollection<T: Ord>: SortedCollection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Lower bound for iterators created after this call; `None` removes it.
    fn set_iterator_min(&mut self, min: Option<T>);

    /// Upper bound for iterators created after this call; `None` removes it.
    fn set_iterator_max(&mut self, max: Option<T>);

    fn iterator(&self) -> Self::Iter<'_>;
}

impl<T: Ord> SortedCollection<T> for BinarySearchTree<T> {
    fn insert(&mut self, value: T) {
        BinarySearchTree::insert(self, value);
    }

    fn try_insert(&mut self, value: Option<T>) -> Result<(), TreeError> {
        BinarySearchTree::try_insert(self, value).map(|_| ())
    }

    fn contains(&self, value: &T) -> bool {
        BinarySearchTree::contains(self, value)
    }

    fn size(&self) -> usize {
        BinarySearchTree::size(self)
    }

    fn is_empty(&self) -> bool {
        BinarySearchTree::is_empty(self)
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self)
    }
}

impl<T: Ord> SortedCollection<T> for RedBlackTree<T> {
    fn insert(&mut self, value: T) {
        RedBlackTree::insert(self, value);
    }

    fn try_insert(&mut self, value: Option<T>) -> Result<(), TreeError> {
        RedBlackTree::try_insert(self, value).map(|_| ())
    }

    fn contains(&self, value: &T) -> bool {
        RedBlackTree::contains(self, value)
    }

    fn size(&self) -> usize {
        RedBlackTree::size(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackTree::is_empty(self)
    }

    fn clear(&mut self) {
        RedBlackTree::clear(self)
    }
}

impl<T: Ord> IterableSortedCollection<T> for RedBlackTree<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn set_iterator_min(&mut self, min: Option<T>) {
        RedBlackTree::set_iterator_min(self, min)
    }

    fn set_iterator_max(&mut self, max: Option<T>) {
        RedBlackTree::set_iterator_max(self, max)
    }

    fn iterator(&self) -> Self::Iter<'_> {
        self.iter()
    }
}
