//! Arena-based ordered index built on a red-black tree.
//!
//! Values are kept as a multiset: duplicates are stored, counted and
//! iterated. Nodes live in a `Vec` arena and link to each other through
//! `Option<u32>` indices, so parent back-references never own anything and
//! a rotation is a handful of index writes.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`ValueNode`] traits and [`BstNode`] |
//! [`util`] | arena navigation, plain insertion, [`rotate`](util::rotate) |
//! [`bst`] | [`BinarySearchTree`], no balancing |
//! [`red_black`] | [`RedBlackTree`], insertion fixup, validation, printing |
//! [`iter`] | [`Iter`], the bounded ascending iterator |
//! [`collection`] | [`SortedCollection`] / [`IterableSortedCollection`] |
//! [`error`] | [`TreeError`] |
//!
//! ```
//! use rb_index::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for v in ["c", "c", "z", "a", "b", "a", "d", "h"] {
//!     tree.insert(v);
//! }
//! tree.set_iterator_max(Some("g"));
//! let values: Vec<&str> = tree.iter().copied().collect();
//! assert_eq!(values, ["a", "a", "b", "c", "c", "d"]);
//! ```

pub mod bst;
pub mod collection;
pub mod error;
pub mod iter;
pub mod red_black;
pub mod types;
pub mod util;

pub use bst::BinarySearchTree;
pub use collection::{IterableSortedCollection, SortedCollection};
pub use error::TreeError;
pub use iter::Iter;
pub use red_black::{RbNode, RbNodeLike, RedBlackTree};
pub use types::{BstNode, Node, ValueNode};
