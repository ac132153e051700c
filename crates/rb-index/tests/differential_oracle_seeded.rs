use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use rb_index::RedBlackTree;

/// Multiset oracle: value -> number of copies.
fn oracle_range(oracle: &BTreeMap<i32, usize>, min: Option<i32>, max: Option<i32>) -> Vec<i32> {
    oracle
        .iter()
        .filter(|(v, _)| min.map_or(true, |m| **v >= m) && max.map_or(true, |m| **v <= m))
        .flat_map(|(v, count)| std::iter::repeat(*v).take(*count))
        .collect()
}

fn random_bound(rng: &mut Xoshiro256StarStar) -> Option<i32> {
    if rng.gen_bool(0.3) {
        None
    } else {
        Some(rng.gen_range(-600..=600))
    }
}

#[test]
fn differential_seeded_tree_matches_multiset_oracle() {
    let seeds = [
        0x5eed_c0de_u64,
        0x0000_0000_0000_0001_u64,
        0x0000_0000_0000_00ff_u64,
        0x0000_0000_00c0_ffee_u64,
        0x0123_4567_89ab_cdef_u64,
    ];

    for seed in seeds {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = RedBlackTree::new();
        let mut oracle: BTreeMap<i32, usize> = BTreeMap::new();
        let mut inserted = 0usize;

        for round in 0..400 {
            let value = rng.gen_range(-500..=500);
            tree.insert(value);
            *oracle.entry(value).or_default() += 1;
            inserted += 1;

            if let Err(err) = tree.assert_valid() {
                panic!("invalid tree (seed={seed}, round={round}): {err}");
            }
            assert_eq!(tree.size(), inserted, "size mismatch (seed={seed})");

            if round % 25 == 0 {
                let probe = rng.gen_range(-550..=550);
                assert_eq!(
                    tree.contains(&probe),
                    oracle.contains_key(&probe),
                    "contains({probe}) mismatch (seed={seed})"
                );

                let min = random_bound(&mut rng);
                let max = random_bound(&mut rng);
                tree.set_iterator_min(min);
                tree.set_iterator_max(max);
                let got: Vec<i32> = tree.iter().copied().collect();
                assert_eq!(
                    got,
                    oracle_range(&oracle, min, max),
                    "range [{min:?}, {max:?}] mismatch (seed={seed})"
                );
            }
        }
    }
}

#[test]
fn differential_seeded_sorted_runs_stay_balanced() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0xba1a_ced0);
    let mut tree = RedBlackTree::new();

    // long ascending and descending runs are the worst case for a plain BST
    for _ in 0..10 {
        let start = rng.gen_range(0..1_000);
        let len = rng.gen_range(50..150);
        if rng.gen_bool(0.5) {
            tree.extend(start..start + len);
        } else {
            tree.extend((start..start + len).rev());
        }
        tree.assert_valid().unwrap();
    }

    fn height(tree: &RedBlackTree<i32>, idx: Option<u32>) -> usize {
        idx.map_or(0, |i| {
            let node = tree.node(i).unwrap();
            1 + height(tree, node.l).max(height(tree, node.r))
        })
    }

    let n = tree.size() as f64;
    let bound = 2.0 * (n + 1.0).log2();
    assert!((height(&tree, tree.root_index()) as f64) <= bound);
}
