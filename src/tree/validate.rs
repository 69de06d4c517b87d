//! Structural checks for a finished suffix tree.
//!
//! Reconstructs every root-to-node path explicitly, so a full check costs
//! O(n^2) time and memory. Meant for tests, debugging and `sufx validate`,
//! not for hot paths.

use super::query::SuffixTree;
use super::symbol::Symbol;
use super::types::{EdgeEnd, NodeId, ROOT};
use crate::collections::Validatable;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// The first invariant a tree was found to break
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("node {node} has two outgoing edges with the same first symbol")]
    DuplicateFirstSymbol { node: NodeId },

    #[error("edge from node {node} is keyed by a symbol other than its label's first")]
    MismatchedKey { node: NodeId },

    #[error("edge from node {node} has an open or empty label")]
    BadLabel { node: NodeId },

    #[error("{nodes} nodes and {edges} edges exceed the bound for text length {text_len}")]
    SizeBound {
        nodes: usize,
        edges: usize,
        text_len: usize,
    },

    #[error("node {node} is unreachable from the root or reached twice")]
    Unreachable { node: NodeId },

    #[error("internal node {node} has a single child")]
    UnaryNode { node: NodeId },

    #[error("leaf {node} has no suffix index")]
    UnnumberedLeaf { node: NodeId },

    #[error("leaf {node} does not spell the suffix starting at {start}")]
    WrongSuffix { node: NodeId, start: usize },

    #[error("suffix {start} is spelled by more than one leaf")]
    DuplicateSuffix { start: usize },

    #[error("expected {expected} leaves, found {found}")]
    LeafCount { expected: usize, found: usize },

    #[error("suffix link of node {node} does not drop exactly one leading symbol")]
    BadSuffixLink { node: NodeId },
}

impl<T: Symbol> SuffixTree<'_, T> {
    /// Check every structural invariant; `true` if all hold
    ///
    /// Read-only and repeatable: it never mutates the tree.
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(violation) => {
                tracing::warn!(%violation, "suffix tree failed validation");
                false
            }
        }
    }

    /// Check every structural invariant and report the first violation
    ///
    /// - distinct first symbols per node, each matching its label
    /// - at most `2N - 1` nodes and `2N - 2` edges for text length `N`
    /// - every leaf spells exactly its own suffix, each suffix once
    /// - suffix links drop exactly one leading symbol
    pub fn check(&self) -> Result<(), Violation> {
        let text = self.text();
        let store = self.store();
        let len = text.length();

        let nodes = store.node_count();
        let edges = store.edge_count();
        if nodes > 2 * len - 1 || edges > 2 * len - 2 || edges + 1 != nodes {
            return Err(Violation::SizeBound {
                nodes,
                edges,
                text_len: len,
            });
        }

        let mut visited = vec![false; nodes];
        let mut internal_paths: FxHashMap<NodeId, Vec<T>> = FxHashMap::default();
        let mut suffixes_seen: FxHashSet<usize> = FxHashSet::default();
        let mut stack: Vec<(NodeId, Vec<T>)> = vec![(ROOT, Vec::new())];

        while let Some((id, path)) = stack.pop() {
            if std::mem::replace(&mut visited[id], true) {
                return Err(Violation::Unreachable { node: id });
            }

            let node = store.node(id);

            if id != ROOT && node.is_leaf() {
                let start = node
                    .suffix_index
                    .ok_or(Violation::UnnumberedLeaf { node: id })?;
                if start >= len || !text.range(start, len).eq(path.iter().copied()) {
                    return Err(Violation::WrongSuffix { node: id, start });
                }
                if !suffixes_seen.insert(start) {
                    return Err(Violation::DuplicateSuffix { start });
                }
                continue;
            }

            if !node.children.validate() {
                return Err(Violation::DuplicateFirstSymbol { node: id });
            }
            if id != ROOT && node.children.iter().count() < 2 {
                return Err(Violation::UnaryNode { node: id });
            }

            for (first, edge) in node.children.iter() {
                let EdgeEnd::Closed(end) = edge.label.end else {
                    return Err(Violation::BadLabel { node: id });
                };
                if end <= edge.label.start || end > len {
                    return Err(Violation::BadLabel { node: id });
                }
                if text.at(edge.label.start) != first {
                    return Err(Violation::MismatchedKey { node: id });
                }

                let mut child_path = path.clone();
                child_path.extend(text.range(edge.label.start, end));
                stack.push((edge.target, child_path));
            }

            internal_paths.insert(id, path);
        }

        if let Some(orphan) = visited.iter().position(|seen| !seen) {
            return Err(Violation::Unreachable { node: orphan });
        }

        if suffixes_seen.len() != len {
            return Err(Violation::LeafCount {
                expected: len,
                found: suffixes_seen.len(),
            });
        }

        for (&id, path) in &internal_paths {
            if id == ROOT {
                continue;
            }
            let linked = store
                .suffix_link(id)
                .and_then(|target| internal_paths.get(&target));
            match linked {
                Some(target_path) if target_path[..] == path[1..] => {}
                _ => return Err(Violation::BadSuffixLink { node: id }),
            }
        }

        Ok(())
    }
}
