use crate::types::{Node, ValueNode};

/// Node of the [`RedBlackTree`](super::RedBlackTree).
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    /// Node color: `true` = black, `false` = red.
    pub b: bool,
}

impl<T> RbNode<T> {
    /// New nodes start out red.
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
            b: false,
        }
    }
}

impl<T> Node for RbNode<T> {
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

impl<T> ValueNode<T> for RbNode<T> {
    fn value(&self) -> &T {
        &self.v
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike<T>: ValueNode<T> {
    fn is_black(&self) -> bool;
    fn set_black(&mut self, black: bool);
}

impl<T> RbNodeLike<T> for RbNode<T> {
    fn is_black(&self) -> bool {
        self.b
    }

    fn set_black(&mut self, black: bool) {
        self.b = black;
    }
}
