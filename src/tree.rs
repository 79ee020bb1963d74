//! An unbalanced BST whose nodes keep a pointer back to their parent. The parent pointers let a
//! [`Cursor`] step to the next or previous key without keeping a stack of visited nodes.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_end());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1).key(), Ok(&1));
//!
//! // Inserting the same key again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::trace;

use crate::cursor::{Cursor, Iter};

/// A Binary Search Tree holding unique keys in ascending order. There is no rebalancing so the
/// height of the tree depends entirely on insertion order.
pub struct Tree<K> {
    // This is a `Link` instead of an `Option<Box<Node>>` so that it can be moved around with the
    // `Tree` without the children's parent pointers breaking.
    root: Link<K>,
    len: usize,
    _owns: PhantomData<Box<Node<K>>>,
}

// SAFETY: A `Tree` exclusively owns every node reachable from its root and only hands out shared
// references through `&self`, so it is as thread-safe as the keys it stores.
unsafe impl<K: Send> Send for Tree<K> {}
unsafe impl<K: Sync> Sync for Tree<K> {}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    /// Frees every node in post-order (children before their parent) using an explicit stack so
    /// that dropping a degenerate, list-shaped tree can't overflow the call stack.
    fn drop(&mut self) {
        let mut stack: Vec<(NonNull<Node<K>>, bool)> =
            self.root.take().0.map(|root| (root, false)).into_iter().collect();
        let mut freed = 0usize;

        while let Some((ptr, children_queued)) = stack.pop() {
            if children_queued {
                // SAFETY: Each node is pushed exactly once as unvisited and exactly once as
                // visited, and only the visited entry frees it. Its children were pushed above it
                // so they've already been freed. `Node` has no `Drop` impl so its now dangling
                // child links are never followed. It was allocated with `Box::new` (in
                // `Node::new_boxed`).
                unsafe { drop(Box::from_raw(ptr.as_ptr())) };
                freed += 1;
                continue;
            }

            stack.push((ptr, true));
            // SAFETY: `ptr` hasn't been freed yet because its visited entry is still on the stack.
            let node = unsafe { ptr.as_ref() };
            stack.extend(node.right.0.map(|right| (right, false)));
            stack.extend(node.left.0.map(|left| (left, false)));
        }

        debug_assert_eq!(freed, self.len);
        trace!("dropped tree with {} nodes", freed);
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    /// Re-inserts the keys in pre-order, which reproduces the exact shape of the original tree.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.key.clone());
            stack.extend(node.right());
            stack.extend(node.left());
        }

        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// The number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key` into the tree if it isn't already present. Returns whether a new node was
    /// added; inserting a duplicate leaves the tree untouched and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut parent = Link(None);
        let mut slot = &mut self.root;

        while let Some(mut ptr) = slot.0 {
            // SAFETY: Taking `&mut self` means no `Cursor` or other reference into the tree is
            // alive. `ptr` came from `Box::leak` and hasn't been freed since only `Drop` frees
            // nodes.
            let node = unsafe { ptr.as_mut() };
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("ignoring insert of a key already in the tree");
                    return false;
                }
            };
            parent = Link(Some(ptr));
        }

        *slot = Link(Some(NonNull::from(Box::leak(Node::new_boxed(key, parent)))));
        self.len += 1;

        if cfg!(debug_assertions) {
            if let Some(parent) = parent.node() {
                parent.assert_ordered();
            }
        }

        true
    }

    /// Returns a cursor on the node holding `key`, or [`end`][Self::end] if there isn't one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).key(), Ok(&3));
    /// assert_eq!(tree.find(&42), tree.end());
    /// ```
    pub fn find(&self, key: &K) -> Cursor<'_, K>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Cursor::new(Some(node), self.root()),
                Ordering::Greater => node.right(),
            };
        }

        self.end()
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        !self.find(key).is_end()
    }

    /// A cursor on the smallest key, or [`end`][Self::end] if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, K> {
        Cursor::new(self.root().map(Node::leftmost), self.root())
    }

    /// The past-the-end cursor. It has no key but [retreating][Cursor::retreat] from it lands on
    /// the largest key.
    pub fn end(&self) -> Cursor<'_, K> {
        Cursor::new(None, self.root())
    }

    /// The smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root().map(|root| &root.leftmost().key)
    }

    /// The largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root().map(|root| &root.rightmost().key)
    }

    /// Iterates over the keys in ascending order. The iterator is double ended so `.rev()` walks
    /// them in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 1, 4, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [8, 7, 6, 5, 4, 3, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.begin(), self.end(), self.len)
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// A possibly empty pointer to a node. Child links own the node they point to; parent links
/// don't.
struct Link<K>(Option<NonNull<Node<K>>>);

impl<K> Clone for Link<K> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<K> Copy for Link<K> {}

impl<K> Link<K> {
    fn node(&self) -> Option<&Node<K>> {
        // SAFETY: If the pointer is not `None` then it is a valid `Node`: nodes are only freed when
        // the owning `Tree` is dropped and every `Link` lives inside that tree. Mutation only
        // happens through `&mut Tree` so no `&mut Node` can alias this shared reference.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    fn points_to(&self, node: &Node<K>) -> bool {
        self.0 == Some(NonNull::from(node))
    }
}

/// A single key with links to its children and its parent.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    left: Link<K>,
    right: Link<K>,
    parent: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K, parent: Link<K>) -> Box<Self> {
        Box::new(Node {
            key,
            left: Link(None),
            right: Link(None),
            parent,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    fn parent(&self) -> Option<&Self> {
        self.parent.node()
    }

    /// The node with the smallest key in the subtree rooted at `self`.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node with the largest key in the subtree rooted at `self`.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// The node holding the next larger key in the whole tree, if any.
    ///
    /// With a right subtree that's its leftmost node. Otherwise climb until we leave a left
    /// subtree - that parent is the first ancestor larger than `self`.
    pub(crate) fn successor(&self) -> Option<&Self> {
        if let Some(right) = self.right() {
            return Some(right.leftmost());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.left.points_to(child) {
                return Some(parent);
            }
            child = parent;
        }

        None
    }

    /// The node holding the next smaller key in the whole tree, if any. Mirror image of
    /// [`successor`][Self::successor].
    pub(crate) fn predecessor(&self) -> Option<&Self> {
        if let Some(left) = self.left() {
            return Some(left.rightmost());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.right.points_to(child) {
                return Some(parent);
            }
            child = parent;
        }

        None
    }

    fn assert_ordered(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left() {
            assert!(self.key > left.key);
            assert!(left.parent.points_to(self));
        }
        if let Some(right) = self.right() {
            assert!(self.key < right.key);
            assert!(right.parent.points_to(self));
        }
    }
}
