use std::{borrow::Borrow, fmt::Debug};

use crate::{
    dot::Dot,
    error::InvariantError,
    iter::{IntoIter, Iter},
    node::{self, Node},
};

/// A self-balancing binary search tree (AVL tree) of unique, ordered keys.
///
/// Insertion, removal and lookup complete in `O(log n)` time. After every
/// mutation, the heights of the left and right subtrees of any node differ by
/// at most 1.
///
/// Inserting a key that is already present is a no-op.
///
/// ```
/// use avltree::AvlTree;
///
/// let mut t = AvlTree::new();
/// t.push([10, 20, 30]);
///
/// assert!(t.contains(&20));
/// assert!(t.delete(&20));
/// assert!(!t.delete(&20));
///
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [10, 30]);
/// ```
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single key.
    pub fn height(&self) -> usize {
        self.root.as_ref().map(|v| v.height() as usize).unwrap_or_default()
    }

    /// Remove all keys from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the minimum key in the tree, if any.
    pub fn first(&self) -> Option<&K> {
        let mut n = self.root.as_deref()?;
        while let Some(v) = n.left() {
            n = v;
        }
        Some(n.key())
    }

    /// Returns the maximum key in the tree, if any.
    pub fn last(&self) -> Option<&K> {
        let mut n = self.root.as_deref()?;
        while let Some(v) = n.right() {
            n = v;
        }
        Some(n.key())
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Render the tree structure as a [Graphviz] digraph.
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let t = AvlTree::from_iter([1, 2]);
    /// println!("{}", t.to_dot());
    /// ```
    ///
    /// [Graphviz]: https://graphviz.org/
    pub fn to_dot(&self) -> Dot<'_, K> {
        Dot(self.root())
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert each key yielded by `keys`, in order.
    ///
    /// Keys already in the tree (including those repeated within `keys`) are
    /// ignored.
    pub fn push<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Insert `key` into the tree.
    ///
    /// Returns `true` if the key was not already present. If it was, the tree
    /// is left unchanged and `false` is returned.
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(key).is_some(),
            None => {
                self.root = Some(Box::new(Node::new(key)));
                true
            }
        };

        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Remove `key` from the tree.
    ///
    /// Returns `false` if the key was not present, in which case the tree is
    /// unchanged.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Remove `key` from the tree, returning the key that was stored in the
    /// tree, if any.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let v = node::remove(&mut self.root, key)?;
        self.len -= 1;
        Some(v)
    }

    /// Returns `true` if `key` is in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the key in the tree equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|v| v.get(key))
    }

    /// Verify the structural invariants of the tree.
    ///
    /// Checks that an in-order traversal is strictly increasing, every cached
    /// subtree height is correct, every balance factor is within `[-1, 1]`
    /// and the tracked length matches the number of nodes.
    ///
    /// These hold for any tree built through the public API; the check exists
    /// for debugging and tests.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: Debug,
    {
        let counted = node::validate(self.root())?;
        if counted != self.len {
            return Err(InvariantError::Length {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<K> Debug for AvlTree<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> PartialEq for AvlTree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for AvlTree<K> where K: Eq {}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut this = Self::new();
        this.push(iter);
        this
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        self.push(iter);
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
