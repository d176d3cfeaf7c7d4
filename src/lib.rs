//! A self-balancing binary search tree (AVL tree) of unique, ordered keys.
//!
//! [`AvlTree`] stores keys of any type implementing [`Ord`] in an owned tree of
//! heap-allocated nodes. Each node caches the height of the subtree rooted at
//! it, and every insertion and removal restores the AVL balance invariant on
//! the way back up from the modified leaf:
//!
//! > For every node, the heights of its left and right subtrees differ by at
//! > most 1.
//!
//! This bounds the height of a tree holding `n` keys to roughly
//! `1.44 * log2(n + 2)`, so insertion, removal and lookup all complete in
//! `O(log n)` time.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = AvlTree::new();
//! t.push([30, 10, 20]);
//!
//! // Duplicate keys are ignored.
//! assert!(!t.insert(10));
//! assert_eq!(t.len(), 3);
//!
//! // Removing an absent key is reported, not an error.
//! assert!(t.delete(&10));
//! assert!(!t.delete(&10));
//!
//! assert_eq!(t.iter().collect::<Vec<_>>(), [&20, &30]);
//! ```
//!
//! Rotations and successor promotions are reported as `trace` records through
//! the [`log`] facade.

#![deny(missing_docs)]

mod dot;
mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use dot::Dot;
pub use error::InvariantError;
pub use iter::{IntoIter, Iter};
pub use tree::AvlTree;
