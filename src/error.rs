//! Error types for suffix tree construction.
//!
//! Only construction can fail. Queries on a finished tree return `false` or
//! empty results instead of errors.

use crate::tree::types::NodeId;
use thiserror::Error;

/// Errors surfaced by [`build_suffix_tree`](crate::build_suffix_tree) and the
/// text buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The input sequence had no symbols.
    #[error("cannot build a suffix tree over an empty input")]
    EmptyInput,

    /// The terminal sentinel occurs inside the input.
    ///
    /// Every suffix must end in its own leaf, which only holds when the
    /// sentinel is unique to the final position.
    #[error("sentinel symbol occurs in the input at position {position}")]
    NonUniqueSentinel { position: usize },

    /// A text position outside `[0, len)` was requested.
    #[error("text index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The node store rejected a mutation during construction.
    ///
    /// This is a construction defect, never a user error. The partially built
    /// tree is discarded.
    #[error("construction invariant violated in phase {phase} (active point {active}): {source}")]
    Invariant {
        phase: usize,
        active: String,
        #[source]
        source: StoreError,
    },
}

/// Structural errors raised by the node store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A node already has an outgoing edge keyed by this symbol.
    #[error("node {node} already has an edge starting with {symbol}")]
    DuplicateEdge { node: NodeId, symbol: String },

    /// A split or walk referenced an edge that does not exist.
    #[error("node {node} has no edge starting with {symbol}")]
    MissingEdge { node: NodeId, symbol: String },

    /// A split offset fell outside the interior of the edge label.
    #[error("cannot split edge of length {len} at offset {offset}")]
    SplitOutOfBounds { offset: usize, len: usize },
}

/// A specialized `Result` type for suffix tree construction.
pub type Result<T> = std::result::Result<T, TreeError>;
