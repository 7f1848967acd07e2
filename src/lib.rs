//! This crate exposes a keyed Binary Search Tree (BST) along with the usual ways of walking and
//! reshaping one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key (the value
//! the tree is ordered by) and a payload, and will sometimes have child `Node`s.
//! The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key.
//!
//! > The second rule allows duplicates. Inserting a key that's already present adds another
//! > node to the right rather than overwriting anything.
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a
//! leaf `Node`. This tree never rebalances itself, so inserting sorted keys produces a chain
//! whose height is the number of keys. [`Tree::balance`][tree::Tree::balance] rebuilds a tree
//! of minimal height on demand.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. [`traversal`] provides that along with pre-order, post-order
//! and level-order walks.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::payload::Payload;
//! use keyed_bst::traversal::format_keys;
//! use keyed_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, Payload::new(key, 'k', 0.0));
//! }
//!
//! assert_eq!(format_keys(tree.level_order()), "5 3 8 1 4 7 9");
//!
//! // 5 has two children so its successor, 7, takes its place.
//! tree.delete(&5);
//! assert_eq!(format_keys(tree.inorder()), "1 3 4 7 8 9");
//! assert_eq!(tree.root().map(|n| *n.key()), Some(7));
//!
//! // Mirroring and balancing build new trees and leave this one alone.
//! assert_eq!(format_keys(tree.mirror().inorder()), "9 8 7 4 3 1");
//! assert_eq!(tree.balance().height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod payload;
pub mod queue;
mod reshape;
pub mod traversal;
pub mod tree;
