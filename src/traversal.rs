//! Walking a [`Tree`] in the four classic orders.
//!
//! The depth-first orders recurse down the tree. Level order uses a [`Queue`] of borrowed nodes
//! so it visits everything at one depth, left to right, before moving deeper.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::traversal::{format_keys, Traversal};
//! use keyed_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, ());
//! }
//!
//! assert_eq!(format_keys(tree.preorder()), "5 3 1 4 8 7 9");
//! assert_eq!(format_keys(tree.inorder()), "1 3 4 5 7 8 9");
//! assert_eq!(format_keys(tree.level_order()), "5 3 8 1 4 7 9");
//!
//! let order: Traversal = "post".parse().unwrap();
//! assert_eq!(format_keys(tree.keys(order)), "1 4 3 7 9 8 5");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::queue::Queue;
use crate::tree::{Node, Tree};

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth first: depth by depth, left to right.
    LevelOrder,
}

impl Traversal {
    /// All orders, in the order they're usually listed.
    pub const ALL: [Traversal; 4] = [
        Traversal::PreOrder,
        Traversal::InOrder,
        Traversal::PostOrder,
        Traversal::LevelOrder,
    ];
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PreOrder => "preorder",
            Self::InOrder => "inorder",
            Self::PostOrder => "postorder",
            Self::LevelOrder => "bfs",
        })
    }
}

/// The name didn't match any [`Traversal`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal order {0:?}, expected one of preorder, inorder, postorder, dfs, bfs")]
pub struct ParseTraversalError(String);

impl FromStr for Traversal {
    type Err = ParseTraversalError;

    /// Case-insensitive. `dfs` is pre-order and `bfs`/`level` are level order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" | "dfs" => Ok(Self::PreOrder),
            "in" | "inorder" | "in-order" => Ok(Self::InOrder),
            "post" | "postorder" | "post-order" => Ok(Self::PostOrder),
            "bfs" | "level" | "levelorder" | "level-order" => Ok(Self::LevelOrder),
            _ => Err(ParseTraversalError(s.to_string())),
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Calls `visit` on every node in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::traversal::Traversal;
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, 20);
    /// tree.insert(1, 10);
    /// tree.insert(3, 30);
    ///
    /// let mut total = 0;
    /// tree.traverse(Traversal::PostOrder, |node| total += node.payload());
    /// assert_eq!(total, 60);
    /// ```
    pub fn traverse<'a, F>(&'a self, order: Traversal, mut visit: F)
    where
        F: FnMut(&'a Node<K, V>),
    {
        let root = self.root();
        match order {
            Traversal::PreOrder => preorder(root, &mut visit),
            Traversal::InOrder => inorder(root, &mut visit),
            Traversal::PostOrder => postorder(root, &mut visit),
            Traversal::LevelOrder => level_order(root, &mut visit),
        }
    }

    /// The keys of the tree in the given order. An empty tree gives an empty `Vec`.
    pub fn keys(&self, order: Traversal) -> Vec<&K> {
        let mut keys = Vec::new();
        self.traverse(order, |node| keys.push(node.key()));
        keys
    }

    /// Keys in pre-order.
    pub fn preorder(&self) -> Vec<&K> {
        self.keys(Traversal::PreOrder)
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Vec<&K> {
        self.keys(Traversal::InOrder)
    }

    /// Keys in post-order.
    pub fn postorder(&self) -> Vec<&K> {
        self.keys(Traversal::PostOrder)
    }

    /// Keys in level order.
    pub fn level_order(&self) -> Vec<&K> {
        self.keys(Traversal::LevelOrder)
    }
}

fn preorder<'a, K, V>(node: Option<&'a Node<K, V>>, visit: &mut impl FnMut(&'a Node<K, V>)) {
    if let Some(node) = node {
        visit(node);
        preorder(node.left(), visit);
        preorder(node.right(), visit);
    }
}

fn inorder<'a, K, V>(node: Option<&'a Node<K, V>>, visit: &mut impl FnMut(&'a Node<K, V>)) {
    if let Some(node) = node {
        inorder(node.left(), visit);
        visit(node);
        inorder(node.right(), visit);
    }
}

fn postorder<'a, K, V>(node: Option<&'a Node<K, V>>, visit: &mut impl FnMut(&'a Node<K, V>)) {
    if let Some(node) = node {
        postorder(node.left(), visit);
        postorder(node.right(), visit);
        visit(node);
    }
}

fn level_order<'a, K, V>(root: Option<&'a Node<K, V>>, visit: &mut impl FnMut(&'a Node<K, V>)) {
    let mut queue = Queue::new();
    if let Some(root) = root {
        queue.enqueue(root);
    }
    while let Some(node) = queue.dequeue() {
        visit(node);
        if let Some(left) = node.left() {
            queue.enqueue(left);
        }
        if let Some(right) = node.right() {
            queue.enqueue(right);
        }
    }
}

/// Renders keys as a single line separated by spaces, e.g. `"1 3 4"`.
pub fn format_keys<I>(keys: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
