//! Single rotations.
//!
//! A rotation only relinks the child, the parent, the grandparent slot that
//! pointed at the parent, and the subtree the child hands over. Nothing else
//! in the arena is read or written.

use crate::error::TreeError;
use crate::types::Node;

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Rotates `child` above `parent`.
///
/// A right child is rotated left, a left child is rotated right. Returns the
/// new root, which is `child` when `parent` was the root.
///
/// # Errors
///
/// - [`TreeError::NullNode`] if either index is absent.
/// - [`TreeError::NotRelated`] if `child` is not a direct child of `parent`.
pub fn rotate<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    child: Option<u32>,
    parent: Option<u32>,
) -> Result<Option<u32>, TreeError> {
    let (Some(child), Some(parent)) = (child, parent) else {
        return Err(TreeError::NullNode);
    };
    let Some(p) = arena.get(parent as usize) else {
        return Err(TreeError::NotRelated { child, parent });
    };

    if p.r() == Some(child) {
        Ok(rotate_left(arena, root, child, parent))
    } else if p.l() == Some(child) {
        Ok(rotate_right(arena, root, child, parent))
    } else {
        Err(TreeError::NotRelated { child, parent })
    }
}

/// `child` must be the right child of `parent`.
pub(crate) fn rotate_left<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    child: u32,
    parent: u32,
) -> Option<u32> {
    let g = get_p(arena, parent);
    let cl = get_l(arena, child);

    set_r(arena, parent, cl);
    if let Some(cl) = cl {
        set_p(arena, cl, Some(parent));
    }
    set_l(arena, child, Some(parent));

    if let Some(g) = g {
        if get_l(arena, g) == Some(parent) {
            set_l(arena, g, Some(child));
        } else {
            set_r(arena, g, Some(child));
        }
    }

    set_p(arena, child, g);
    set_p(arena, parent, Some(child));
    log::trace!("rotated node {child} left over node {parent}");

    if root == Some(parent) {
        Some(child)
    } else {
        root
    }
}

/// `child` must be the left child of `parent`.
pub(crate) fn rotate_right<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    child: u32,
    parent: u32,
) -> Option<u32> {
    let g = get_p(arena, parent);
    let cr = get_r(arena, child);

    set_l(arena, parent, cr);
    if let Some(cr) = cr {
        set_p(arena, cr, Some(parent));
    }
    set_r(arena, child, Some(parent));

    if let Some(g) = g {
        if get_r(arena, g) == Some(parent) {
            set_r(arena, g, Some(child));
        } else {
            set_l(arena, g, Some(child));
        }
    }

    set_p(arena, child, g);
    set_p(arena, parent, Some(child));
    log::trace!("rotated node {child} right over node {parent}");

    if root == Some(parent) {
        Some(child)
    } else {
        root
    }
}
