use crate::util::rotate::{rotate_left, rotate_right};
use crate::util::{self, first, get_l, get_p, get_r, next};

use super::types::RbNodeLike;

mod print;

pub use print::{label, print};

#[inline]
fn is_black<T, N>(arena: &[N], i: u32) -> bool
where
    N: RbNodeLike<T>,
{
    arena[i as usize].is_black()
}

#[inline]
fn set_black<T, N>(arena: &mut [N], i: u32, v: bool)
where
    N: RbNodeLike<T>,
{
    arena[i as usize].set_black(v);
}

/// Inserts the detached node `n` and restores the red-black invariants.
///
/// `n` is colored red, attached with the plain binary-search-tree descent
/// (ties go right), then repaired by [`ensure_red_property`]. The root is
/// black on return. Returns the new root.
pub fn insert<T, N>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32>
where
    N: RbNodeLike<T>,
    T: Ord,
{
    // a raw rotation may have lifted a red node to the top
    if let Some(r) = root {
        set_black(arena, r, true);
    }
    set_black(arena, n, false);
    let mut root = util::insert::<N, T>(arena, root, n);
    if get_p(arena, n).is_some() {
        root = ensure_red_property::<T, N>(arena, root, n);
    }
    if let Some(r) = root {
        set_black(arena, r, true);
    }
    root
}

/// Repairs a red-red violation between the red node `n` and its parent.
///
/// Walks upward while the red-aunt case keeps pushing the violation towards
/// the root; every other case finishes in place. Returns the new root.
pub fn ensure_red_property<T, N>(arena: &mut [N], mut root: Option<u32>, mut n: u32) -> Option<u32>
where
    N: RbNodeLike<T>,
{
    loop {
        let Some(p) = get_p(arena, n) else {
            log::trace!("fixup: node {n} is the root");
            set_black(arena, n, true);
            return root;
        };
        if is_black(arena, p) {
            return root;
        }
        // the root is black, so a red parent always has a parent of its own
        let Some(g) = get_p(arena, p) else {
            debug_assert!(false, "red node {p} is the root");
            return root;
        };

        let parent_is_left = get_l(arena, g) == Some(p);
        let aunt = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        match aunt {
            Some(a) if !is_black(arena, a) => {
                log::trace!("fixup: red aunt {a}, recoloring below node {g}");
                set_black(arena, a, true);
                set_black(arena, p, true);
                set_black(arena, g, false);
                n = g;
                continue;
            }
            _ => {}
        }

        let node_is_left = get_l(arena, p) == Some(n);
        if node_is_left == parent_is_left {
            log::trace!("fixup: black aunt, line at node {n}");
            root = if parent_is_left {
                rotate_right(arena, root, p, g)
            } else {
                rotate_left(arena, root, p, g)
            };
            set_black(arena, g, false);
            set_black(arena, p, true);
        } else {
            log::trace!("fixup: black aunt, zig-zag at node {n}");
            root = if node_is_left {
                rotate_right(arena, root, n, p)
            } else {
                rotate_left(arena, root, n, p)
            };
            root = if parent_is_left {
                rotate_right(arena, root, n, g)
            } else {
                rotate_left(arena, root, n, g)
            };
            set_black(arena, n, true);
            set_black(arena, g, false);
        }
        return root;
    }
}

/// Number of black nodes on the path from `i` up to the root, `i` included.
fn black_depth<T, N>(arena: &[N], mut i: u32) -> Result<usize, String>
where
    N: RbNodeLike<T>,
{
    let mut depth = 0;
    for _ in 0..arena.len() {
        depth += usize::from(is_black(arena, i));
        match get_p(arena, i) {
            Some(p) => i = p,
            None => return Ok(depth),
        }
    }
    Err(format!("Cycle in parent links above node {i}"))
}

/// Checks every red-black and ordering invariant of the tree at `root`.
///
/// Walks the nodes in order. Each node must be linked back by its children,
/// must not be red under a red parent, and must not sort before its
/// predecessor. Every absent child slot must see the same number of black
/// nodes on its way up to the root.
pub fn assert_red_black_tree<T, N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    N: RbNodeLike<T>,
    T: Ord,
{
    let Some(root) = root else {
        return Ok(());
    };
    let Some(top) = arena.get(root as usize) else {
        return Err(format!("Root {root} is outside the arena"));
    };
    if top.p().is_some() {
        return Err(format!("Root {root} has a parent"));
    }
    if !top.is_black() {
        return Err(format!("Root {root} is red"));
    }

    let mut leaf_depth: Option<usize> = None;
    let mut prev: Option<u32> = None;
    let mut visited = 0;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        visited += 1;
        if visited > arena.len() {
            return Err("Cycle in node links".to_string());
        }
        let node = &arena[i as usize];

        for child in [node.l(), node.r()].into_iter().flatten() {
            if get_p(arena, child) != Some(i) {
                return Err(format!("Node {child} does not link back to parent {i}"));
            }
        }
        if let Some(p) = node.p() {
            if !node.is_black() && !is_black(arena, p) {
                return Err(format!("Red node {i} has red parent {p}"));
            }
        }
        if node.l().is_none() || node.r().is_none() {
            let depth = black_depth(arena, i)?;
            match leaf_depth {
                None => leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(format!(
                        "Black height mismatch below node {i}: {depth} != {expected}"
                    ));
                }
                Some(_) => {}
            }
        }
        if let Some(prev) = prev {
            if arena[prev as usize].value() > node.value() {
                return Err(format!("Node {i} sorts before its predecessor {prev}"));
            }
        }

        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
