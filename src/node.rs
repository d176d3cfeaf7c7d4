use std::{borrow::Borrow, cmp::Ordering, fmt::Debug};

use log::trace;

use crate::{error::InvariantError, iter::NodeIter};

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child nodes pointers.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an empty subtree has a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `key` into the subtree rooted at `self`.
    ///
    /// Returns [`None`] if `key` already exists in the subtree, leaving it
    /// untouched. Otherwise returns the ordering of `key` relative to the key
    /// held in `self`, which the caller uses to pick the rotation needed to
    /// rebalance its own subtree.
    pub(crate) fn insert(self: &mut Box<Self>, key: K) -> Option<Ordering>
    where
        K: Ord,
    {
        let dir = key.cmp(&self.key);
        let child = match dir {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return None,
            Ordering::Greater => &mut self.right,
        };

        // The ordering of "key" relative to the child it descended into.
        let child_dir = match child {
            Some(v) => v.insert(key)?,
            None => {
                // A new leaf skews this node by at most 1 in its direction, so
                // the subtree cannot need rebalancing here.
                *child = Some(Box::new(Self::new(key)));
                update_height(self);
                return Some(dir);
            }
        };

        update_height(self);

        // A balance factor of 2 can only be caused by an insert into the left
        // subtree (and -2 into the right), so "child_dir" describes the
        // heavy child.
        match (balance(self), child_dir) {
            // Left-left
            (2, Ordering::Less) => rotate_right(self),
            // Left-right
            (2, _) => {
                self.left_mut().map(rotate_left);
                rotate_right(self);
            }
            // Right-right
            (-2, Ordering::Greater) => rotate_left(self),
            // Right-left
            (-2, _) => {
                self.right_mut().map(rotate_right);
                rotate_left(self);
            }
            (-1..=1, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        Some(dir)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.key),
            Ordering::Greater => self.right(),
        }?;

        node.get(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    trace!("rotated left, subtree height now {}", x.height);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    trace!("rotated right, subtree height now {}", y.height);
}

/// Remove `key` from the subtree rooted at `node`, returning the key that was
/// stored in the tree.
///
/// Returns [`None`] and leaves the subtree untouched if `key` is not found.
pub(crate) fn remove<K, Q>(node: &mut Option<Box<Node<K>>>, key: &Q) -> Option<K>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let n = node.as_mut()?;

    let removed = match key.cmp(n.key.borrow()) {
        Ordering::Less => remove(&mut n.left, key)?,
        Ordering::Greater => remove(&mut n.right, key)?,
        Ordering::Equal if n.left.is_some() && n.right.is_some() => {
            // This node has two children:
            //
            //                          +----------+
            //                     +----|    n     |----+
            //                     |    +----------+    |
            //                     v                    v
            //               +-----------+       +------------+
            //               |  n.left   |       |  n.right   |
            //               +-----------+       +------------+
            //
            // Unlink the in-order successor (the minimum node of "n.right")
            // and move its key into "n", leaving the links of "n" in place.
            let successor = remove_min(&mut n.right)?;

            // Invariant: the successor is the minimum of the right subtree, so
            // it never has a left child.
            debug_assert!(successor.left.is_none());

            trace!("promoting in-order successor");
            std::mem::replace(&mut n.key, successor.into_key())
        }
        Ordering::Equal => {
            // Zero or one child: the surviving child (if any) replaces this
            // node at the parent link. It is already balanced.
            let mut old = node.take()?;
            *node = old.take_left().or_else(|| old.take_right());

            return Some(old.into_key());
        }
    };

    rebalance(n);
    Some(removed)
}

/// Unlink and return the node holding the minimum key of the subtree rooted at
/// `node`, linking its right subtree (if any) in its place.
///
/// Returns [`None`] when the subtree is empty.
pub(crate) fn remove_min<K>(node: &mut Option<Box<Node<K>>>) -> Option<Box<Node<K>>> {
    let n = node.as_mut()?;

    if n.left.is_some() {
        // Descend left to the leaf.
        let min = remove_min(&mut n.left);
        rebalance(n);
        return min;
    }

    // This is the end of the left edge.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    let mut min = node.take()?;
    *node = min.take_right();
    Some(min)
}

fn rebalance<K>(v: &mut Box<Node<K>>) {
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree, using the heavy child's own balance factor to
    // choose between a single and a double rotation.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            v.left_mut().map(rotate_left);
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            v.right_mut().map(rotate_right);
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}

/// Walk the subtree rooted at `root` in order, checking the ordering, height
/// and balance invariants of every node.
///
/// Returns the number of nodes visited.
pub(crate) fn validate<K>(root: Option<&Node<K>>) -> Result<usize, InvariantError>
where
    K: Ord + Debug,
{
    let mut count = 0;
    let mut prev: Option<&K> = None;

    for n in root.into_iter().flat_map(NodeIter::new) {
        count += 1;

        if let Some(prev) = prev {
            if prev >= n.key() {
                return Err(InvariantError::Unordered {
                    prev: format!("{prev:?}"),
                    next: format!("{:?}", n.key()),
                });
            }
        }
        prev = Some(n.key());

        let want = 1 + height(n.left()).max(height(n.right()));
        if n.height() != want {
            return Err(InvariantError::Height {
                key: format!("{:?}", n.key()),
                cached: n.height(),
                computed: want,
            });
        }

        let factor = balance(n);
        if factor.abs() > 1 {
            return Err(InvariantError::Unbalanced {
                key: format!("{:?}", n.key()),
                factor,
            });
        }
    }

    Ok(count)
}
