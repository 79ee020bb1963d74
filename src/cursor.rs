//! Positions into a [`Tree`][crate::Tree] that step through its keys in order.
//!
//! A [`Cursor`] sits either on a node or past-the-end. Stepping uses the nodes' parent pointers
//! so it needs no extra allocation: a full walk touches every edge twice, which makes each step
//! amortized `O(1)` (worst case `O(height)`).
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let tree: Tree<_> = [5, 3, 7, 1, 4, 6, 8].into_iter().collect();
//!
//! // Walk backwards from past-the-end to the smallest key.
//! let mut cursor = tree.end();
//! let mut descending = Vec::new();
//! while cursor != tree.begin() {
//!     cursor.retreat();
//!     descending.push(*cursor.key().unwrap());
//! }
//!
//! assert_eq!(descending, [8, 7, 6, 5, 4, 3, 1]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::error::{Error, Result};
use crate::tree::Node;

/// A position in a [`Tree`][crate::Tree]: either on a key or past-the-end.
///
/// Two cursors are equal when they sit on the same node, or are both past-the-end. A cursor
/// borrows the tree so the tree can't change underneath it.
pub struct Cursor<'a, K> {
    current: Option<&'a Node<K>>,
    // Kept even when `current` is `None` so that retreating from past-the-end can find the
    // largest key.
    root: Option<&'a Node<K>>,
}

impl<'a, K> Clone for Cursor<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K> Copy for Cursor<'a, K> {}

impl<'a, K> PartialEq for Cursor<'a, K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
impl<'a, K> Eq for Cursor<'a, K> {}

impl<'a, K> fmt::Debug for Cursor<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current {
            Some(node) => f.debug_tuple("Cursor").field(&node.key).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

impl<'a, K> Cursor<'a, K> {
    pub(crate) fn new(current: Option<&'a Node<K>>, root: Option<&'a Node<K>>) -> Self {
        Self { current, root }
    }

    /// The key under the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDereference`] if the cursor is past-the-end.
    pub fn key(&self) -> Result<&'a K> {
        self.current
            .map(|node| &node.key)
            .ok_or(Error::InvalidDereference)
    }

    /// Whether the cursor is past-the-end.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next larger key, or past-the-end after the largest one. Advancing a
    /// past-the-end cursor leaves it where it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.find(&2);
    ///
    /// cursor.advance();
    /// assert_eq!(cursor.key(), Ok(&3));
    ///
    /// cursor.advance();
    /// assert_eq!(cursor, tree.end());
    /// ```
    pub fn advance(&mut self) {
        if let Some(node) = self.current {
            self.current = node.successor();
        }
    }

    /// Moves to the next smaller key. Retreating from past-the-end lands on the largest key (or
    /// stays past-the-end if the tree is empty); retreating from the smallest key goes
    /// past-the-end.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.end();
    ///
    /// cursor.retreat();
    /// assert_eq!(cursor.key(), Ok(&3));
    ///
    /// cursor.retreat();
    /// assert_eq!(cursor.key(), Ok(&2));
    /// ```
    pub fn retreat(&mut self) {
        self.current = match self.current {
            Some(node) => node.predecessor(),
            None => self.root.map(Node::rightmost),
        };
    }
}

/// An iterator over the keys of a [`Tree`][crate::Tree] in ascending order. Created by
/// [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, K> {
    front: Cursor<'a, K>,
    // Exclusive: `back` is one step after the last key not yet yielded from the back.
    back: Cursor<'a, K>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(front: Cursor<'a, K>, back: Cursor<'a, K>, remaining: usize) -> Self {
        Self {
            front,
            back,
            remaining,
        }
    }
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, K> fmt::Debug for Iter<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front.key().ok()?;
        self.front.advance();
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.retreat();
        self.remaining -= 1;
        self.back.key().ok()
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}
impl<'a, K> FusedIterator for Iter<'a, K> {}
