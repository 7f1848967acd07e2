//! Operations that build a brand new tree out of an existing one: mirroring and rebalancing.
//!
//! Neither touches the source tree. Every node of the result is a fresh allocation so the two
//! trees can be modified or dropped independently.

use log::debug;

use crate::tree::{height, Link, Node, Tree};

impl<K, V> Tree<K, V> {
    /// Returns a deep copy of this tree with left and right swapped at every node. Its in-order
    /// keys are this tree's in-order keys reversed, and mirroring twice gives back a tree with
    /// the original shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let mirrored = tree.mirror();
    /// assert_eq!(mirrored.inorder(), [&3, &2, &1]);
    /// assert_eq!(tree.inorder(), [&1, &2, &3]);
    /// ```
    pub fn mirror(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        fn mirror<K: Clone, V: Clone>(node: Option<&Node<K, V>>) -> Link<K, V> {
            node.map(|n| {
                Box::new(Node {
                    key: n.key.clone(),
                    payload: n.payload.clone(),
                    left: mirror(n.right()),
                    right: mirror(n.left()),
                })
            })
        }

        let mirrored = Self::from_root(mirror(self.root()));
        debug!("mirror: copied a tree of height {}", mirrored.height());
        mirrored
    }

    /// Returns a tree with the same keys rebuilt to minimal height.
    ///
    /// The keys are read off in order (so they come out sorted) and the lower median of each
    /// range becomes the root of that range's subtree. For `n` keys the result is at most
    /// `ceil(log2(n + 1))` levels tall.
    ///
    /// Payloads are *not* carried over: every rebuilt node gets `V::default()`. Use
    /// [`balance_preserving_payloads`][Tree::balance_preserving_payloads] to keep them.
    ///
    /// With duplicate keys, the lower median can land on a key that also appears in the range
    /// left of it, so the result may hold an equal key in a left subtree. Lookups and deletes
    /// still find every copy eventually since they stop at the first match on the way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::payload::Payload;
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key, Payload::new(key, 'k', 1.0));
    /// }
    /// assert_eq!(tree.height(), 7);
    ///
    /// let balanced = tree.balance();
    /// assert_eq!(balanced.height(), 3);
    /// assert_eq!(balanced.root().map(|n| *n.key()), Some(4));
    /// assert_eq!(balanced.find(&4), Some(&Payload::default()));
    /// ```
    pub fn balance(&self) -> Self
    where
        K: Clone,
        V: Default,
    {
        let keys = self.inorder();
        let balanced = Self::from_root(build(&keys, &mut |key: &&K| {
            ((*key).clone(), V::default())
        }));
        debug!(
            "balance: rebuilt {} nodes, height {} -> {}",
            keys.len(),
            self.height(),
            balanced.height()
        );
        balanced
    }

    /// Like [`balance`][Tree::balance] but every rebuilt node keeps the payload it had in this
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=3 {
    ///     tree.insert(key, key * 100);
    /// }
    ///
    /// let balanced = tree.balance_preserving_payloads();
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(balanced.find(&3), Some(&300));
    /// ```
    pub fn balance_preserving_payloads(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut nodes = Vec::new();
        self.traverse(crate::traversal::Traversal::InOrder, |node| nodes.push(node));
        let balanced = Self::from_root(build(&nodes, &mut |node: &&Node<K, V>| {
            (node.key.clone(), node.payload.clone())
        }));
        debug!(
            "balance: rebuilt {} nodes with payloads, height {} -> {}",
            nodes.len(),
            self.height(),
            balanced.height()
        );
        balanced
    }
}

/// Builds a minimal-height subtree out of `sorted`, making a node out of each item with `make`.
/// The lower median becomes the root so the tree is deterministic for a given input.
fn build<T, K, V>(sorted: &[T], make: &mut impl FnMut(&T) -> (K, V)) -> Link<K, V> {
    if sorted.is_empty() {
        return None;
    }
    let mid = (sorted.len() - 1) / 2;
    let (key, payload) = make(&sorted[mid]);
    let mut node = Node::new_boxed(key, payload);
    node.left = build(&sorted[..mid], make);
    node.right = build(&sorted[mid + 1..], make);
    debug_assert!(height(Some(&*node)) <= ceil_log2(sorted.len() + 1));
    Some(node)
}

/// Smallest `h` with `2^h >= n`.
fn ceil_log2(n: usize) -> usize {
    n.next_power_of_two().trailing_zeros() as usize
}
