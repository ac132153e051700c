use std::fmt::{Debug, Display};

use super::super::types::RbNodeLike;

/// Short node label: the value followed by `(b)` or `(r)`.
pub fn label<T, N>(node: &N) -> String
where
    T: Display,
    N: RbNodeLike<T>,
{
    let color = if node.is_black() { "b" } else { "r" };
    format!("{}({color})", node.value())
}

/// Debug printer for red-black trees.
pub fn print<T, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    T: Debug,
    N: RbNodeLike<T>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.is_black() { "black" } else { "red" };
            let left = print::<T, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<T, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.value()
            )
        }
    }
}
