//! Types for suffix tree indexing
//!
//! Edge labels are index ranges into the text, never copies, so every edge
//! is created in O(1) regardless of its length.

use serde::{Deserialize, Serialize};

/// Stable index of a node in the store
pub type NodeId = usize;

/// The root is always the first node allocated
pub const ROOT: NodeId = 0;

/// End of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Extends to the current construction frontier (leaf edges only)
    Open,
    /// Fixed exclusive end index
    Closed(usize),
}

/// Half-open range `[start, end)` into the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub start: usize,
    pub end: EdgeEnd,
}

impl Label {
    pub fn open(start: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
        }
    }

    pub fn closed(start: usize, end: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Closed(end),
        }
    }

    /// Concrete end, resolving an open end against `frontier`
    #[inline]
    pub fn end(&self, frontier: usize) -> usize {
        match self.end {
            EdgeEnd::Open => frontier,
            EdgeEnd::Closed(end) => end,
        }
    }

    #[inline]
    pub fn len(&self, frontier: usize) -> usize {
        self.end(frontier) - self.start
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.end == EdgeEnd::Open
    }
}

/// Outgoing edge: a label plus the node it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub label: Label,
    pub target: NodeId,
}

/// One enumerated suffix: its start index and the concatenated edge labels
/// from the root to its leaf (sentinel included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixEntry<T> {
    pub start: usize,
    pub symbols: Vec<T>,
}

/// Statistics about a finished suffix tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeStats {
    /// Text length including the sentinel
    pub text_len: usize,
    /// All nodes, root included
    pub nodes: usize,
    /// Nodes with at least one outgoing edge, root included
    pub internal_nodes: usize,
    /// Equals `text_len` for a well-formed tree
    pub leaves: usize,
    pub edges: usize,
    /// Longest root-to-internal-node path length in symbols
    pub max_internal_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_label_tracks_frontier() {
        let label = Label::open(2);
        assert!(label.is_open());
        assert_eq!(label.len(3), 1);
        assert_eq!(label.len(7), 5);
    }

    #[test]
    fn test_closed_label_ignores_frontier() {
        let label = Label::closed(1, 4);
        assert!(!label.is_open());
        assert_eq!(label.end(100), 4);
        assert_eq!(label.len(100), 3);
    }
}
