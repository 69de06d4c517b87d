//! Active point tracker for online construction.
//!
//! The active edge is stored as a text index rather than a symbol: the
//! symbol is `text[edge]`, and keeping the index lets a walk-down advance it
//! by whole edge lengths.

use super::types::{NodeId, ROOT};
use std::fmt;

/// `(active node, active edge, active length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub node: NodeId,
    /// Text index whose symbol selects the outgoing edge of `node`
    pub edge: usize,
    /// Symbols already matched along that edge
    pub length: usize,
}

impl ActivePoint {
    pub fn new() -> Self {
        Self {
            node: ROOT,
            edge: 0,
            length: 0,
        }
    }

    pub fn reset_to_root(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn at_root(&self) -> bool {
        self.node == ROOT
    }

    /// Skip/count walk-down: the whole edge of `by` symbols was consumed, so
    /// continue from its target.
    #[inline]
    pub fn advance(&mut self, by: usize, target: NodeId) {
        debug_assert!(by <= self.length);
        self.node = target;
        self.edge += by;
        self.length -= by;
    }

    /// Point the active edge at `index` when nothing has been matched yet.
    #[inline]
    pub fn anchor(&mut self, index: usize) {
        if self.length == 0 {
            self.edge = index;
        }
    }

    /// One more symbol matched in place (extension rule 3).
    #[inline]
    pub fn extend(&mut self) {
        self.length += 1;
    }

    /// Move to the next shorter suffix after an explicit extension.
    ///
    /// From the root the first symbol is dropped by shrinking the length and
    /// re-anchoring the edge at `next_edge`; elsewhere the suffix link of the
    /// active node is followed, falling back to the root.
    pub fn retreat(&mut self, suffix_link: Option<NodeId>, next_edge: usize) {
        if self.at_root() {
            if self.length > 0 {
                self.length -= 1;
                self.edge = next_edge;
            }
        } else {
            self.node = suffix_link.unwrap_or(ROOT);
        }
    }
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(node {}, edge {}, length {})",
            self.node, self.edge, self.length
        )
    }
}
