//! Suffix tree queries
//!
//! A finished tree is immutable: every method here takes `&self`, so one
//! tree can serve queries from any number of threads without locking.

use super::store::NodeStore;
use super::symbol::Symbol;
use super::text::Text;
use super::types::{NodeId, ROOT, SuffixEntry, TreeStats};
use crate::collections::{Container, Sequenceable, Validatable};
use rustc_hash::FxHashSet;

/// A finalized suffix tree borrowing its text for `'t`
#[derive(Debug, Clone)]
pub struct SuffixTree<'t, T> {
    text: Text<'t, T>,
    store: NodeStore<T>,
}

impl<'t, T: Symbol> SuffixTree<'t, T> {
    pub(crate) fn from_parts(text: Text<'t, T>, store: NodeStore<T>) -> Self {
        Self { text, store }
    }

    /// The indexed text (input plus sentinel)
    #[inline]
    pub fn text(&self) -> &Text<'t, T> {
        &self.text
    }

    #[inline]
    pub(crate) fn store(&self) -> &NodeStore<T> {
        &self.store
    }

    /// Text length including the sentinel
    #[inline]
    pub fn len(&self) -> usize {
        self.text.length()
    }

    /// Always `false`: empty inputs are rejected at construction
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.store
            .nodes()
            .filter(|(id, node)| *id != ROOT && node.is_leaf())
            .count()
    }

    /// Check if `pattern` occurs in the indexed text
    ///
    /// The empty pattern is always present. Runs in O(|pattern|).
    pub fn contains(&self, pattern: &[T]) -> bool {
        self.locate(pattern).is_some()
    }

    /// Walk `pattern` down from the root and return the node at or below
    /// which it ends
    ///
    /// Full edges are compared as whole label ranges while the remaining
    /// pattern is at least as long as the edge; the final edge is compared
    /// only up to the end of the pattern.
    fn locate(&self, pattern: &[T]) -> Option<NodeId> {
        let end = self.text.length();
        let mut node = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let edge = self.store.edge(node, pattern[matched])?;
            let take = edge.label.len(end).min(pattern.len() - matched);

            let label = self.text.range(edge.label.start, edge.label.start + take);
            if !label.eq(pattern[matched..matched + take].iter().copied()) {
                return None;
            }

            matched += take;
            node = edge.target;
        }

        Some(node)
    }

    /// Start positions of every occurrence of `pattern`, ascending
    ///
    /// The empty pattern occurs at every position `0..=n`.
    pub fn occurrences(&self, pattern: &[T]) -> Vec<usize> {
        let Some(node) = self.locate(pattern) else {
            return Vec::new();
        };

        let mut positions = self.leaves_below(node);
        positions.sort_unstable();
        positions
    }

    /// Number of occurrences of `pattern` (without sorting positions)
    pub fn count_occurrences(&self, pattern: &[T]) -> usize {
        self.locate(pattern)
            .map(|node| self.leaves_below(node).len())
            .unwrap_or(0)
    }

    /// Suffix indices of all leaves in the subtree rooted at `node`
    fn leaves_below(&self, node: NodeId) -> Vec<usize> {
        let end = self.text.length();
        let mut positions = Vec::new();
        let mut stack = vec![(node, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let current = self.store.node(id);
            if id != ROOT && current.is_leaf() {
                positions.push(current.suffix_index.unwrap_or(end - depth));
                continue;
            }
            for (_, edge) in current.children.iter() {
                stack.push((edge.target, depth + edge.label.len(end)));
            }
        }

        positions
    }

    /// Lazily enumerate every suffix as `(start, symbols)`
    ///
    /// Children are visited in ascending first-symbol order, so with a
    /// sentinel that sorts first the entries come out in lexicographic
    /// order. Each call starts a fresh traversal.
    pub fn enumerate_suffixes(&self) -> Suffixes<'_, 't, T> {
        Suffixes::new(self)
    }

    /// Every suffix as a set of symbol sequences
    pub fn suffix_set(&self) -> FxHashSet<Vec<T>> {
        self.enumerate_suffixes().map(|entry| entry.symbols).collect()
    }

    /// Get statistics about this tree
    pub fn stats(&self) -> TreeStats {
        let end = self.text.length();
        let mut stats = TreeStats {
            text_len: end,
            nodes: self.store.node_count(),
            edges: self.store.edge_count(),
            ..Default::default()
        };

        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.store.node(id);
            if id != ROOT && node.is_leaf() {
                stats.leaves += 1;
                continue;
            }

            stats.internal_nodes += 1;
            stats.max_internal_depth = stats.max_internal_depth.max(depth);
            for (_, edge) in node.children.iter() {
                stack.push((edge.target, depth + edge.label.len(end)));
            }
        }

        stats
    }
}

impl SuffixTree<'_, u8> {
    /// Convenience for byte trees built over UTF-8 text
    pub fn contains_str(&self, pattern: &str) -> bool {
        self.contains(pattern.as_bytes())
    }
}

impl<T: Symbol> Container for SuffixTree<'_, T> {
    fn len(&self) -> usize {
        self.text.length()
    }
}

impl<T: Symbol> Validatable for SuffixTree<'_, T> {
    fn validate(&self) -> bool {
        SuffixTree::validate(self)
    }
}

impl<T: Symbol> Sequenceable for SuffixTree<'_, T> {
    type Item = SuffixEntry<T>;

    fn to_vec(&self) -> Vec<SuffixEntry<T>> {
        self.enumerate_suffixes().collect()
    }
}

/// Pending edge in a suffix enumeration
struct Frame {
    target: NodeId,
    start: usize,
    end: usize,
    /// Path length at the edge's parent
    depth: usize,
}

/// Depth-first suffix enumeration, see [`SuffixTree::enumerate_suffixes`]
pub struct Suffixes<'a, 't, T> {
    tree: &'a SuffixTree<'t, T>,
    stack: Vec<Frame>,
    path: Vec<T>,
}

impl<'a, 't, T: Symbol> Suffixes<'a, 't, T> {
    fn new(tree: &'a SuffixTree<'t, T>) -> Self {
        let mut suffixes = Self {
            tree,
            stack: Vec::new(),
            path: Vec::new(),
        };
        suffixes.push_children(ROOT);
        suffixes
    }

    /// Queue the children of `node` so the smallest symbol pops first
    fn push_children(&mut self, node: NodeId) {
        let end = self.tree.text.length();
        let depth = self.path.len();
        for (_, edge) in self.tree.store.node(node).children.iter().rev() {
            self.stack.push(Frame {
                target: edge.target,
                start: edge.label.start,
                end: edge.label.end(end),
                depth,
            });
        }
    }
}

impl<T: Symbol> Iterator for Suffixes<'_, '_, T> {
    type Item = SuffixEntry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.tree.text.length();

        while let Some(frame) = self.stack.pop() {
            self.path.truncate(frame.depth);
            self.path
                .extend(self.tree.text.range(frame.start, frame.end));

            let node = self.tree.store.node(frame.target);
            if node.is_leaf() {
                return Some(SuffixEntry {
                    start: node.suffix_index.unwrap_or(end - self.path.len()),
                    symbols: self.path.clone(),
                });
            }

            self.push_children(frame.target);
        }

        None
    }
}
