//! Suffix tree builder
//!
//! Builds a suffix tree online, one symbol per phase (Ukkonen's algorithm):
//! 1. Every phase extends all open leaf edges implicitly by moving the
//!    frontier one symbol to the right
//! 2. Pending suffixes are made explicit from the active point, splitting
//!    edges and chaining suffix links between the new internal nodes
//! 3. A phase stops early as soon as the next suffix is already present
//!
//! After the sentinel phase every suffix ends in its own leaf. A final
//! depth-first pass closes open edges and numbers the leaves.
//!
//! Total work is O(n): suffix links bound the retreats, and walk-downs skip
//! whole edges by comparing lengths instead of symbols.

use super::active::ActivePoint;
use super::query::SuffixTree;
use super::store::NodeStore;
use super::symbol::Symbol;
use super::text::Text;
use super::types::{Label, NodeId, ROOT};
use crate::error::{Result, StoreError, TreeError};

/// Phases between two progress callbacks
const PROGRESS_INTERVAL: usize = 1 << 16;

type ProgressFn<'p> = Box<dyn FnMut(usize, usize) + 'p>;

/// Builder for constructing a suffix tree over a borrowed text
pub struct SuffixTreeBuilder<'t, 'p, T> {
    symbols: &'t [T],
    sentinel: T,
    progress: Option<ProgressFn<'p>>,
}

impl<'t, 'p, T: Symbol> SuffixTreeBuilder<'t, 'p, T> {
    /// Create a builder using the alphabet's default sentinel
    pub fn new(symbols: &'t [T]) -> Self {
        Self {
            symbols,
            sentinel: T::SENTINEL,
            progress: None,
        }
    }

    /// Terminate the text with `sentinel` instead of the default
    pub fn sentinel(mut self, sentinel: T) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Observe construction as `(phases_done, total_phases)`
    ///
    /// Called periodically and once more when the last phase completes.
    pub fn on_progress(mut self, callback: impl FnMut(usize, usize) + 'p) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Validate the input and run construction to completion
    ///
    /// Precondition errors are reported before any node is allocated.
    pub fn build(self) -> Result<SuffixTree<'t, T>> {
        let text = Text::with_sentinel(self.symbols, self.sentinel)?;
        let total = text.length();

        tracing::debug!(text_len = total, "building suffix tree");

        let mut construction = Construction::new(text);
        let mut progress = self.progress;

        for phase in 0..total {
            construction.extend(phase)?;

            if phase % PROGRESS_INTERVAL == 0 {
                if let Some(callback) = progress.as_mut() {
                    callback(phase, total);
                }
            }
        }

        if let Some(callback) = progress.as_mut() {
            callback(total, total);
        }

        let tree = construction.finalize();

        tracing::debug!(
            nodes = tree.node_count(),
            edges = tree.edge_count(),
            "suffix tree built"
        );

        Ok(tree)
    }
}

/// Mutable construction state, dropped once the tree is finalized
struct Construction<'t, T> {
    text: Text<'t, T>,
    store: NodeStore<T>,
    active: ActivePoint,
    /// Suffixes not yet explicit at the current phase
    remaining: usize,
}

impl<'t, T: Symbol> Construction<'t, T> {
    fn new(text: Text<'t, T>) -> Self {
        Self {
            store: NodeStore::with_capacity(2 * text.length()),
            text,
            active: ActivePoint::new(),
            remaining: 0,
        }
    }

    /// Phase `phase`: extend every suffix with `text[phase]`
    fn extend(&mut self, phase: usize) -> Result<()> {
        let frontier = phase + 1;
        let symbol = self.text.at(phase);

        self.remaining += 1;
        if self.remaining == 1 {
            self.active.reset_to_root();
        }

        // Internal node created by the previous extension of this phase,
        // still waiting for its suffix link
        let mut pending_link: Option<NodeId> = None;

        while self.remaining > 0 {
            self.active.anchor(phase);
            let edge_symbol = self.text.at(self.active.edge);

            match self.store.edge(self.active.node, edge_symbol).copied() {
                None => {
                    // Rule 2 at a node: hang a new leaf directly
                    let leaf = self.store.create_node();
                    self.store
                        .add_edge(self.active.node, symbol, Label::open(phase), leaf)
                        .map_err(|e| self.invariant(phase, e))?;

                    if let Some(prev) = pending_link.take() {
                        self.store.set_suffix_link(prev, self.active.node);
                    }
                }
                Some(edge) => {
                    let edge_len = edge.label.len(frontier);
                    if self.active.length >= edge_len {
                        self.active.advance(edge_len, edge.target);
                        continue;
                    }

                    if self.text.at(edge.label.start + self.active.length) == symbol {
                        // Rule 3: already present, defer the rest to the next phase
                        if let Some(prev) = pending_link.take() {
                            if !self.active.at_root() {
                                self.store.set_suffix_link(prev, self.active.node);
                            }
                        }
                        self.active.extend();
                        break;
                    }

                    // Rule 2 inside an edge: split, then hang the leaf off the split
                    let mid = self
                        .store
                        .split_edge(
                            self.active.node,
                            edge_symbol,
                            self.active.length,
                            &self.text,
                            frontier,
                        )
                        .map_err(|e| self.invariant(phase, e))?;
                    self.store.set_suffix_link(mid, ROOT);

                    let leaf = self.store.create_node();
                    self.store
                        .add_edge(mid, symbol, Label::open(phase), leaf)
                        .map_err(|e| self.invariant(phase, e))?;

                    if let Some(prev) = pending_link.replace(mid) {
                        self.store.set_suffix_link(prev, mid);
                    }
                }
            }

            self.remaining -= 1;
            let link = self.store.suffix_link(self.active.node);
            self.active.retreat(link, frontier - self.remaining);
        }

        Ok(())
    }

    fn invariant(&self, phase: usize, source: StoreError) -> TreeError {
        tracing::error!(phase, active = %self.active, error = %source, "construction aborted");
        TreeError::Invariant {
            phase,
            active: self.active.to_string(),
            source,
        }
    }

    /// Close every open edge at `n + 1` and number the leaves by the start
    /// of the suffix they spell out.
    fn finalize(mut self) -> SuffixTree<'t, T> {
        let end = self.text.length();
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

        while let Some((node, depth)) = stack.pop() {
            self.store.close_open_edges(node, end);

            let current = self.store.node(node);
            if node != ROOT && current.is_leaf() {
                self.store.set_suffix_index(node, end - depth);
                continue;
            }

            for (_, edge) in current.children.iter() {
                stack.push((edge.target, depth + edge.label.len(end)));
            }
        }

        SuffixTree::from_parts(self.text, self.store)
    }
}
