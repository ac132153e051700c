//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every link is an
//! `Option<u32>` index into that arena: `l` / `r` are the owned child slots,
//! `p` is a back-reference used only for traversal and relinking.

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node carrying an ordered value.
pub trait ValueNode<T>: Node {
    fn value(&self) -> &T;
}

/// Node of the unbalanced [`BinarySearchTree`](crate::BinarySearchTree).
#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
}

impl<T> BstNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
        }
    }
}

impl<T> Node for BstNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ValueNode<T> for BstNode<T> {
    fn value(&self) -> &T {
        &self.v
    }
}
