use rb_index::{BinarySearchTree, TreeError};

fn values(tree: &BinarySearchTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

/// Value at the end of a path of `'l'` / `'r'` steps from the root.
fn at(tree: &BinarySearchTree<i32>, path: &str) -> Option<i32> {
    let mut curr = tree.root_index()?;
    for step in path.chars() {
        let node = tree.node(curr)?;
        curr = match step {
            'l' => node.l?,
            _ => node.r?,
        };
    }
    tree.value(curr).copied()
}

fn idx_of(tree: &BinarySearchTree<i32>, path: &str) -> Option<u32> {
    let mut curr = tree.root_index()?;
    for step in path.chars() {
        let node = tree.node(curr)?;
        curr = match step {
            'l' => node.l?,
            _ => node.r?,
        };
    }
    Some(curr)
}

/// Pre-order dump of the subtree at `idx`, with parent links checked.
fn shape(tree: &BinarySearchTree<i32>, idx: Option<u32>) -> String {
    match idx {
        None => ".".to_string(),
        Some(i) => {
            let node = tree.node(i).unwrap();
            for child in [node.l, node.r].into_iter().flatten() {
                assert_eq!(tree.node(child).unwrap().p, Some(i), "broken parent link at {child}");
            }
            format!(
                "{}({} {})",
                node.v,
                shape(tree, node.l),
                shape(tree, node.r)
            )
        }
    }
}

fn sample() -> BinarySearchTree<i32> {
    //            50
    //        30        70
    //      20  40    60  80
    //             45
    let mut tree = BinarySearchTree::new();
    for v in [50, 30, 70, 20, 40, 60, 80, 45] {
        tree.insert(v);
    }
    tree
}

#[test]
fn bst_insert_shape_matrix() {
    let tree = sample();
    assert_eq!(at(&tree, ""), Some(50));
    assert_eq!(at(&tree, "l"), Some(30));
    assert_eq!(at(&tree, "r"), Some(70));
    assert_eq!(at(&tree, "lr"), Some(40));
    assert_eq!(at(&tree, "lrr"), Some(45));
    assert_eq!(values(&tree), vec![20, 30, 40, 45, 50, 60, 70, 80]);
    assert_eq!(tree.size(), 8);
}

#[test]
fn bst_duplicates_go_right_matrix() {
    let mut tree = BinarySearchTree::new();
    for v in [10, 5, 10, 10, 7] {
        tree.insert(v);
    }
    assert_eq!(at(&tree, "r"), Some(10));
    assert_eq!(at(&tree, "rr"), Some(10));
    assert_eq!(at(&tree, "lr"), Some(7));
    assert_eq!(tree.size(), 5);
    assert!(tree.contains(&10));
    assert_eq!(values(&tree), vec![5, 7, 10, 10, 10]);
}

#[test]
fn bst_rotate_left_at_root_matrix() {
    let mut tree = sample();
    let root = tree.root_index();
    let right = idx_of(&tree, "r");
    let untouched_left = shape(&tree, idx_of(&tree, "l"));
    let untouched_rr = shape(&tree, idx_of(&tree, "rr"));

    tree.rotate(right, root).unwrap();

    assert_eq!(tree.root_index(), right);
    assert_eq!(tree.node(right.unwrap()).unwrap().p, None);
    assert_eq!(
        shape(&tree, tree.root_index()),
        "70(50(30(20(. .) 40(. 45(. .))) 60(. .)) 80(. .))"
    );
    assert_eq!(shape(&tree, idx_of(&tree, "ll")), untouched_left);
    assert_eq!(shape(&tree, idx_of(&tree, "r")), untouched_rr);
    assert_eq!(values(&tree), vec![20, 30, 40, 45, 50, 60, 70, 80]);
}

#[test]
fn bst_rotate_right_below_grandparent_matrix() {
    let mut tree = sample();
    let parent = idx_of(&tree, "l");
    let child = idx_of(&tree, "ll");
    let untouched_right = shape(&tree, idx_of(&tree, "r"));

    tree.rotate(child, parent).unwrap();

    assert_eq!(at(&tree, ""), Some(50));
    assert_eq!(at(&tree, "l"), Some(20));
    assert_eq!(at(&tree, "lr"), Some(30));
    assert_eq!(at(&tree, "lrr"), Some(40));
    assert_eq!(tree.node(child.unwrap()).unwrap().p, tree.root_index());
    assert_eq!(shape(&tree, idx_of(&tree, "r")), untouched_right);
    assert_eq!(values(&tree), vec![20, 30, 40, 45, 50, 60, 70, 80]);
}

#[test]
fn bst_rotate_moves_inner_subtree_matrix() {
    let mut tree = sample();
    let parent = idx_of(&tree, "l");
    let child = idx_of(&tree, "lr");
    let inner = shape(&tree, idx_of(&tree, "lrl"));
    let outer = shape(&tree, idx_of(&tree, "lrr"));

    // 40 has no left subtree, so 30 ends up with an empty right slot
    tree.rotate(child, parent).unwrap();
    assert_eq!(at(&tree, "l"), Some(40));
    assert_eq!(at(&tree, "ll"), Some(30));
    assert_eq!(at(&tree, "lll"), Some(20));
    assert_eq!(shape(&tree, idx_of(&tree, "llr")), inner);
    assert_eq!(shape(&tree, idx_of(&tree, "lr")), outer);

    // rotating back restores the original shape
    tree.rotate(parent, child).unwrap();
    assert_eq!(shape(&tree, tree.root_index()), shape(&sample(), sample().root_index()));
}

#[test]
fn bst_rotate_hands_over_subtree_matrix() {
    let mut tree = sample();
    let root = tree.root_index();
    let left = idx_of(&tree, "l");
    let handed = idx_of(&tree, "lr");

    tree.rotate(left, root).unwrap();
    assert_eq!(tree.root_index(), left);
    assert_eq!(tree.node(root.unwrap()).unwrap().l, handed);
    assert_eq!(tree.node(handed.unwrap()).unwrap().p, root);
    assert_eq!(
        shape(&tree, tree.root_index()),
        "30(20(. .) 50(40(. 45(. .)) 70(60(. .) 80(. .))))"
    );
}

#[test]
fn bst_rotate_errors_matrix() {
    let mut tree = sample();
    let before = shape(&tree, tree.root_index());
    let root = tree.root_index();
    let left = idx_of(&tree, "l");
    let right = idx_of(&tree, "r");
    let grandchild = idx_of(&tree, "ll");

    assert_eq!(tree.rotate(None, root), Err(TreeError::NullNode));
    assert_eq!(tree.rotate(left, None), Err(TreeError::NullNode));
    assert_eq!(tree.rotate(None, None), Err(TreeError::NullNode));
    assert_eq!(
        tree.rotate(left, right),
        Err(TreeError::NotRelated {
            child: left.unwrap(),
            parent: right.unwrap()
        })
    );
    assert_eq!(
        tree.rotate(grandchild, root),
        Err(TreeError::NotRelated {
            child: grandchild.unwrap(),
            parent: root.unwrap()
        })
    );
    assert_eq!(
        tree.rotate(root, left),
        Err(TreeError::NotRelated {
            child: root.unwrap(),
            parent: left.unwrap()
        })
    );
    assert_eq!(shape(&tree, tree.root_index()), before);
}

#[test]
fn bst_contains_matrix() {
    let mut tree = BinarySearchTree::new();
    assert!(!tree.contains(&"x"));
    assert!(!tree.contains_opt(None));
    for v in ["m", "c", "x", "a"] {
        tree.insert(v);
    }
    assert!(tree.contains(&"a"));
    assert!(tree.contains(&"x"));
    assert!(!tree.contains(&"b"));
    assert!(!tree.contains_opt(None));
    tree.clear();
    assert!(!tree.contains(&"a"));
    assert!(tree.is_empty());
}
