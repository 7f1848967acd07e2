use keyed_bst::tree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::{init_logger, Op};

/// How many copies of each key a tree should hold.
type Model<K> = BTreeMap<K, usize>;

/// Expands a model into the sorted keys, duplicates included.
fn sorted_keys<K: Clone>(model: &Model<K>) -> Vec<K> {
    model
        .iter()
        .flat_map(|(k, &count)| std::iter::repeat(k.clone()).take(count))
        .collect()
}

/// Smallest `h` with `2^h >= n`.
fn ceil_log2(n: usize) -> usize {
    n.next_power_of_two().trailing_zeros() as usize
}

fn tree_of(xs: &[i8]) -> Tree<i8, i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, *x);
    }
    tree
}

/// Applies a set of operations to a tree and a multiset model.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, duplicates included, in both.
/// Returns `false` as soon as a traversal disagrees with the model.
fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut Tree<K, V>, model: &mut Model<K>) -> bool
where
    K: Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(k.clone(), v.clone());
                *model.entry(k.clone()).or_insert(0) += 1;
            }
            Op::Delete(k) => {
                let deleted = tree.delete(k).is_some();
                let expected = match model.get_mut(k) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            model.remove(k);
                        }
                        true
                    }
                    None => false,
                };
                if deleted != expected {
                    return false;
                }
            }
            Op::Traverse => {
                let keys: Vec<K> = tree.inorder().into_iter().cloned().collect();
                if keys != sorted_keys(model) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    init_logger();
    let mut tree = Tree::new();
    let mut model = Model::new();

    if !do_ops(&ops, &mut tree, &mut model) {
        return false;
    }
    tree.check_consistency();

    tree.len() == model.values().sum::<usize>()
        && model.keys().all(|key| tree.contains(key))
        && (i8::MIN..=i8::MAX)
            .filter(|key| !model.contains_key(key))
            .all(|key| !tree.contains(&key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let mut still_present = xs;
    for delete in &deletes {
        let deleted = tree.delete(delete).is_some();
        // Each delete removes exactly one copy, if there is one.
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !deleted {
                    return false;
                }
            }
            None if deleted => return false,
            None => {}
        }
    }
    tree.check_consistency();

    tree.len() == still_present.len() && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.inorder().into_iter().copied().eq(sorted)
}

#[quickcheck]
fn every_order_visits_every_node(xs: Vec<i8>) -> bool {
    use keyed_bst::traversal::Traversal;

    let tree = tree_of(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    Traversal::ALL.iter().all(|&order| {
        let mut keys: Vec<i8> = tree.keys(order).into_iter().copied().collect();
        keys.sort_unstable();
        keys == sorted
    })
}

#[quickcheck]
fn level_order_starts_at_root(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.level_order().first().copied() == tree.root().map(|n| n.key())
        && tree.preorder().first() == tree.level_order().first()
}

#[quickcheck]
fn mirror_reverses_inorder(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mirrored = tree.mirror();
    let mut reversed = tree.inorder();
    reversed.reverse();

    mirrored.inorder() == reversed && mirrored.height() == tree.height()
}

#[quickcheck]
fn mirror_twice_keeps_shape(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let twice = tree.mirror().mirror();

    twice.preorder() == tree.preorder()
        && twice.postorder() == tree.postorder()
        && twice.level_order() == tree.level_order()
}

#[quickcheck]
fn balance_is_minimal(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let balanced = tree.balance();

    balanced.height() <= ceil_log2(xs.len() + 1)
        && balanced.inorder() == tree.inorder()
        && balanced.len() == xs.len()
        && tree.len() == xs.len()
}

#[quickcheck]
fn balance_without_duplicates_is_a_bst(xs: Vec<i8>) -> bool {
    let mut xs = xs;
    xs.sort_unstable();
    xs.dedup();
    let tree = tree_of(&xs);

    let balanced = tree.balance();
    balanced.check_consistency();
    let preserving = tree.balance_preserving_payloads();
    preserving.check_consistency();

    balanced.preorder() == preserving.preorder()
        && xs.iter().all(|x| preserving.find(x) == Some(x) && balanced.find(x) == Some(&0))
}
