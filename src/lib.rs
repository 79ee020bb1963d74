//! This crate exposes an ordered set built on a plain (unbalanced) Binary Search Tree whose nodes
//! link back to their parents, plus a bidirectional cursor for walking it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores records in `Node`s. Each `Node` holds a key and up to two child
//! `Node`s. The invariants that make it a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Keys are unique: inserting a key that's already present does nothing.
//!
//! Searching takes `O(height)`. Nothing here keeps the tree balanced, so inserting keys in sorted
//! order produces a tree as tall as it has keys.
//!
//! ## Cursors
//!
//! Every `Node` also keeps a non-owning pointer to its parent. That lets a [`Cursor`] find the next
//! or previous key from nothing but the node it's sitting on: go down into a child subtree if
//! there is one, otherwise climb until we come up out of the correct side of a parent.
//! Past-the-end is a real cursor position that still remembers the root, so retreating from
//! [`Tree::end`] lands on the largest key.
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 7, 1, 4, 6, 8] {
//!     tree.insert(key);
//! }
//!
//! let mut cursor = tree.begin();
//! let mut ascending = Vec::new();
//! while cursor != tree.end() {
//!     ascending.push(*cursor.key().unwrap());
//!     cursor.advance();
//! }
//! assert_eq!(ascending, [1, 3, 4, 5, 6, 7, 8]);
//!
//! assert_eq!(tree.find(&4).key(), Ok(&4));
//! assert_eq!(tree.find(&10), tree.end());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cursor;
pub mod error;
pub mod tree;

pub use cursor::{Cursor, Iter};
pub use error::{Error, Result};
pub use tree::Tree;
