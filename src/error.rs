use thiserror::Error;

/// A structural invariant violation found by
/// [`AvlTree::check_invariants()`](crate::AvlTree::check_invariants).
///
/// Keys are rendered with their [`Debug`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// An in-order traversal yielded `prev` before `next`, but `prev` is not
    /// strictly less than `next`.
    #[error("keys out of order: {prev} yielded before {next}")]
    Unordered {
        /// The key yielded first.
        prev: String,
        /// The key yielded second.
        next: String,
    },

    /// The cached height of a node does not match the height of its children.
    #[error("node {key} caches height {cached}, expected {computed}")]
    Height {
        /// The key of the offending node.
        key: String,
        /// The height stored in the node.
        cached: u8,
        /// The height derived from the node's children.
        computed: u8,
    },

    /// The heights of a node's subtrees differ by more than 1.
    #[error("node {key} has balance factor {factor}")]
    Unbalanced {
        /// The key of the offending node.
        key: String,
        /// Left subtree height minus right subtree height.
        factor: i8,
    },

    /// The recorded number of keys does not match the number of nodes.
    #[error("tree records {recorded} keys but holds {counted} nodes")]
    Length {
        /// The length tracked by the tree.
        recorded: usize,
        /// The number of nodes found by traversal.
        counted: usize,
    },
}
