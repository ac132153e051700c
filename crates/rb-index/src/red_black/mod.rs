//! Red-black tree: colored nodes, insertion fixup, validation and printing.

mod tree;
pub mod types;
pub mod util;

pub use tree::RedBlackTree;
pub use types::{RbNode, RbNodeLike};
pub use util::{assert_red_black_tree, ensure_red_property, insert, label, print};
