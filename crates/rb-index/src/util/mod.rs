//! Arena tree (p / l / r) utility functions.
//!
//! All functions take the arena as a slice and work with `u32` indices.
//! Functions that may change the root return the new root index.

pub mod rotate;

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::types::{Node, ValueNode};

pub use rotate::rotate;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Index the next node pushed onto an arena of `len` nodes will get.
pub(crate) fn next_index(len: usize) -> Result<u32, TreeError> {
    u32::try_from(len).map_err(|_| TreeError::CapacityExceeded)
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Finds a node whose value compares equal to `value`.
///
/// With duplicates present, the match closest to the root is returned.
pub fn find<N, T>(arena: &[N], root: Option<u32>, value: &T) -> Option<u32>
where
    N: ValueNode<T>,
    T: Ord,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match value.cmp(arena[i as usize].value()) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Less => get_l(arena, i),
        };
    }
    None
}

/// Attaches the detached node `n` to the tree rooted at `root` without
/// rebalancing.
///
/// Values comparing greater than or equal to a node descend into its right
/// subtree, so equal values pile up to the right of the first tie.
/// Returns the new root.
pub fn insert<N, T>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32>
where
    N: ValueNode<T>,
    T: Ord,
{
    let Some(mut curr) = root else {
        log::trace!("node {n} becomes the root");
        return Some(n);
    };

    loop {
        let right = arena[n as usize].value().cmp(arena[curr as usize].value()) != Ordering::Less;
        let child = if right {
            get_r(arena, curr)
        } else {
            get_l(arena, curr)
        };
        match child {
            Some(child) => curr = child,
            None => {
                if right {
                    set_r(arena, curr, Some(n));
                } else {
                    set_l(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                log::trace!(
                    "node {n} attached as {} child of node {curr}",
                    if right { "right" } else { "left" }
                );
                return root;
            }
        }
    }
}
