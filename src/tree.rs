//! An owned, unbalanced BST that keeps every key it's given.
//!
//! Unlike a map, inserting a key that's already present doesn't overwrite anything: the new node
//! is routed right of the existing one, so duplicates pile up in the right subtree of the first
//! node carrying that key. The shape of the tree is decided purely by insertion order. Nothing
//! rotates on insert or delete; see [`Tree::balance`] for an explicit rebuild.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::payload::Payload;
//! use keyed_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(1, Payload::new(10, 'a', 0.5));
//! let node = tree.search(&1).unwrap();
//! assert_eq!(node.key(), &1);
//! assert_eq!(node.payload().letter, 'a');
//!
//! // Deleting a node hands back its payload.
//! assert_eq!(tree.delete(&1), Some(Payload::new(10, 'a', 0.5)));
//! assert!(tree.search(&1).is_none());
//! ```

use std::cmp::Ordering;
use std::mem;

use log::{debug, trace};

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a payload that rides along with
/// that key. Each child is either absent or exclusively owned by this node.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) payload: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, payload: V) -> Box<Self> {
        Box::new(Self {
            key,
            payload,
            left: None,
            right: None,
        })
    }

    /// The key this node is ordered by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload stored with the key.
    pub fn payload(&self) -> &V {
        &self.payload
    }

    /// Mutable access to the payload. The key can't be changed in place since that could break
    /// the ordering of the tree.
    pub fn payload_mut(&mut self) -> &mut V {
        &mut self.payload
    }

    /// The root of the left subtree, if any. Every key in there is strictly less than
    /// [`key`][Node::key].
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every key in there is greater than or equal to
    /// [`key`][Node::key].
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }
}

/// A Binary Search Tree owning a possibly absent root [`Node`]. All structural operations are
/// methods on this type.
#[derive(Clone, Debug)]
pub struct Tree<K, V> {
    pub(crate) root: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    pub(crate) fn from_root(root: Link<K, V>) -> Self {
        Self { root }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        fn count<K, V>(node: Option<&Node<K, V>>) -> usize {
            node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
        }
        count(self.root())
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2, ());
    /// tree.insert(1, ());
    /// tree.insert(3, ());
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Inserts a new node for the given key and payload. Equal keys go right, so inserting a key
    /// that's already present adds a second node rather than overwriting the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 'a');
    /// tree.insert(1, 'b');
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&1), Some(&'a'));
    /// ```
    pub fn insert(&mut self, key: K, payload: V)
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *link = Some(Node::new_boxed(key, payload));
        trace!("insert: attached node at depth {}", depth);
    }

    /// Finds the node carrying the given key. With duplicates, this is the first matching node on
    /// the path down from the root.
    pub fn search(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Mutable counterpart of [`search`][Tree::search]. Only the payload of the returned node can
    /// be changed.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Potentially finds the payload associated with the given key. If no node has the
    /// corresponding key, `None` is returned.
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.search(key).map(Node::payload)
    }

    /// Whether any node carries the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// The node with the smallest key: the leftmost node.
    pub fn min(&self) -> Option<&Node<K, V>> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current)
    }

    /// The node with the largest key: the rightmost node.
    pub fn max(&self) -> Option<&Node<K, V>> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(current)
    }

    /// Deletes one node carrying the given key and returns its payload. If the tree does not
    /// contain the key, nothing happens.
    ///
    /// The node removed is the one [`search`][Tree::search] would find. When it has two
    /// children, its in-order successor (the leftmost node of its right subtree) is unlinked
    /// and its key and payload move into the matched node's place.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 7, 9] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// assert_eq!(tree.delete(&5), Some(50));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(7));
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let deleted = delete(&mut self.root, key);
        trace!("delete: found = {}", deleted.is_some());
        deleted
    }

    /// Releases every node, children before their parent, leaving the tree empty and ready for
    /// reuse. Returns how many nodes were released.
    pub fn clear(&mut self) -> usize {
        let released = release(self.root.take());
        if released > 0 {
            debug!("clear: released {} nodes", released);
        }
        released
    }

    /// Asserts the BST ordering invariant over the whole tree: everything left of a node is
    /// strictly less than it and everything right of it is greater or equal.
    ///
    /// ## Panics
    ///
    /// When some node is out of order.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        K: Ord,
    {
        /// `lower` is an inclusive bound and `upper` an exclusive one.
        fn check<K: Ord, V>(node: Option<&Node<K, V>>, lower: Option<&K>, upper: Option<&K>) {
            let Some(node) = node else {
                return;
            };
            if let Some(lower) = lower {
                assert!(&node.key >= lower, "node is less than an ancestor it's right of");
            }
            if let Some(upper) = upper {
                assert!(&node.key < upper, "node is not less than an ancestor it's left of");
            }
            check(node.left(), lower, Some(&node.key));
            check(node.right(), Some(&node.key), upper);
        }

        check(self.root(), None, None);
    }
}

pub(crate) fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
}

/// Deletes one node with `key` from the subtree at `link`, relinking `link` to the subtree's new
/// root.
fn delete<K, V>(link: &mut Link<K, V>, key: &K) -> Option<V>
where
    K: Ord,
{
    let node = link.as_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let successor = take_min(&mut node.right)?;
            let Node { key, payload, .. } = *successor;
            node.key = key;
            Some(mem::replace(&mut node.payload, payload))
        }
        Ordering::Equal => {
            let deleted = link.take()?;
            let Node {
                payload,
                left,
                right,
                ..
            } = *deleted;
            // At most one of these is present.
            *link = left.or(right);
            Some(payload)
        }
    }
}

/// Unlinks the leftmost node of the subtree at `link`, splicing its right child into its place.
fn take_min<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Post-order release of a subtree: left, right, then the node itself.
fn release<K, V>(link: Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(mut node) => {
            let released = release(node.left.take()) + release(node.right.take());
            drop(node);
            released + 1
        }
    }
}
