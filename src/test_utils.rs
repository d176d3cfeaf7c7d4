use std::fmt::Debug;

use proptest::prelude::*;

use crate::AvlTree;

/// The size of the key domain used by property tests.
///
/// A small value domain encourages multiple operations to act on the same key.
pub(crate) const N_VALUES: usize = 200;

#[derive(Debug)]
pub(crate) enum Op {
    Insert(usize),
    Push(Vec<usize>),
    Contains(usize),
    Delete(usize),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..N_VALUES).prop_map(Op::Insert),
        prop::collection::vec(0..N_VALUES, 1..5).prop_map(Op::Push),
        (0..N_VALUES).prop_map(Op::Contains),
        (0..N_VALUES).prop_map(Op::Delete),
    ]
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<K>(t: &AvlTree<K>)
where
    K: Ord + Debug,
{
    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a key strictly less than
        // this node.
        assert!(n.left().map(|v| v.key() < n.key()).unwrap_or(true));

        // Invariant 2: the right child always contains a key strictly greater
        // than this node.
        assert!(n.right().map(|v| v.key() > n.key()).unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height (an empty subtree has a height of 0).
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with key {:?} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(balance <= 1, "balance={balance}, node={n:?}");
    }

    assert_eq!(n_nodes, t.len());

    // The parent/child checks above do not cover the full subtree ordering,
    // which the in-order traversal does.
    assert_eq!(t.check_invariants(), Ok(()));
}
