//! Edge/node store: an arena of nodes addressed by stable indices.
//!
//! Suffix links and edge targets are plain [`NodeId`]s, so the back
//! references of the suffix-link graph never turn into shared ownership.

use super::symbol::Symbol;
use super::text::Text;
use super::types::{Edge, EdgeEnd, Label, NodeId, ROOT};
use crate::collections::{Clearable, Container, Sequenceable, Validatable};
use crate::error::StoreError;

/// Outgoing edges of one node, sorted by first symbol.
///
/// Most nodes have a handful of children, so a sorted vector beats a hash
/// map on both memory and lookup cost, and gives ordered iteration for free.
#[derive(Debug, Clone)]
pub struct ChildMap<T> {
    entries: Vec<(T, Edge)>,
}

impl<T: Symbol> ChildMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self, symbol: T) -> Option<&Edge> {
        self.entries
            .binary_search_by(|(s, _)| s.cmp(&symbol))
            .ok()
            .map(|i| &self.entries[i].1)
    }

    #[inline]
    pub fn get_mut(&mut self, symbol: T) -> Option<&mut Edge> {
        match self.entries.binary_search_by(|(s, _)| s.cmp(&symbol)) {
            Ok(i) => Some(&mut self.entries[i].1),
            Err(_) => None,
        }
    }

    /// Insert a new edge. Returns the rejected edge if `symbol` is taken.
    pub fn insert(&mut self, symbol: T, edge: Edge) -> Result<(), Edge> {
        match self.entries.binary_search_by(|(s, _)| s.cmp(&symbol)) {
            Ok(_) => Err(edge),
            Err(i) => {
                self.entries.insert(i, (symbol, edge));
                Ok(())
            }
        }
    }

    /// Edges in ascending first-symbol order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (T, &Edge)> + '_ {
        self.entries.iter().map(|(s, e)| (*s, e))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Edge> + '_ {
        self.entries.iter_mut().map(|(_, e)| e)
    }
}

impl<T: Symbol> Default for ChildMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for ChildMap<T> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Symbol> Validatable for ChildMap<T> {
    /// Keys strictly ascending, which implies pairwise distinct.
    fn validate(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

impl<T: Symbol> Sequenceable for ChildMap<T> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        self.entries.iter().map(|(s, _)| *s).collect()
    }
}

/// A node of the suffix tree.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub children: ChildMap<T>,
    /// Set on internal nodes (and the root, which links to itself)
    pub suffix_link: Option<NodeId>,
    /// Start of the suffix a leaf terminates, assigned at finalize
    pub suffix_index: Option<usize>,
}

impl<T: Symbol> Node<T> {
    fn new() -> Self {
        Self {
            children: ChildMap::new(),
            suffix_link: None,
            suffix_index: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena owning every node and edge of one tree.
#[derive(Debug, Clone)]
pub struct NodeStore<T> {
    nodes: Vec<Node<T>>,
    edge_count: usize,
}

impl<T: Symbol> NodeStore<T> {
    /// A store holding only the root, whose suffix link is itself.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Reserve room for `capacity` nodes up front.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        let mut root = Node::new();
        root.suffix_link = Some(ROOT);
        nodes.push(root);
        Self {
            nodes,
            edge_count: 0,
        }
    }

    /// Allocate a node with no edges and no suffix link.
    pub fn create_node(&mut self) -> NodeId {
        self.nodes.push(Node::new());
        self.nodes.len() - 1
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    #[inline]
    pub fn edge(&self, from: NodeId, first: T) -> Option<&Edge> {
        self.nodes[from].children.get(first)
    }

    /// Attach `from --label--> to`, keyed by `first`.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        first: T,
        label: Label,
        to: NodeId,
    ) -> Result<(), StoreError> {
        self.nodes[from]
            .children
            .insert(first, Edge { label, target: to })
            .map_err(|_| StoreError::DuplicateEdge {
                node: from,
                symbol: format!("{:?}", first),
            })?;
        self.edge_count += 1;
        Ok(())
    }

    /// Break the edge `from --first-->` after `offset` symbols, inserting a
    /// new internal node at the split point.
    ///
    /// The upper half keeps the original key and ends at the new node; the
    /// lower half keeps the original target and end (open ends stay open).
    /// Returns the new node so the caller can hang a leaf and a suffix link
    /// off it.
    pub fn split_edge(
        &mut self,
        from: NodeId,
        first: T,
        offset: usize,
        text: &Text<'_, T>,
        frontier: usize,
    ) -> Result<NodeId, StoreError> {
        let edge = *self.edge(from, first).ok_or_else(|| StoreError::MissingEdge {
            node: from,
            symbol: format!("{:?}", first),
        })?;

        let len = edge.label.len(frontier);
        if offset == 0 || offset >= len {
            return Err(StoreError::SplitOutOfBounds { offset, len });
        }

        let split_at = edge.label.start + offset;
        let mid = self.create_node();

        if let Some(upper) = self.nodes[from].children.get_mut(first) {
            upper.label = Label::closed(edge.label.start, split_at);
            upper.target = mid;
        }

        let lower = Label {
            start: split_at,
            end: edge.label.end,
        };
        self.add_edge(mid, text.at(split_at), lower, edge.target)?;

        tracing::trace!(from, mid, split_at, "split edge");
        Ok(mid)
    }

    pub fn set_suffix_link(&mut self, node: NodeId, target: NodeId) {
        self.nodes[node].suffix_link = Some(target);
    }

    #[inline]
    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].suffix_link
    }

    pub fn set_suffix_index(&mut self, node: NodeId, index: usize) {
        self.nodes[node].suffix_index = Some(index);
    }

    /// Replace every open end below `node` with `end`.
    pub fn close_open_edges(&mut self, node: NodeId, end: usize) {
        for edge in self.nodes[node].children.iter_mut() {
            if edge.label.end == EdgeEnd::Open {
                edge.label.end = EdgeEnd::Closed(end);
            }
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        self.nodes.iter().enumerate()
    }
}

impl<T: Symbol> Default for NodeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> Container for NodeStore<T> {
    fn len(&self) -> usize {
        self.node_count()
    }
}

impl<T: Symbol> Clearable for NodeStore<T> {
    /// Drop everything but a fresh root.
    fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT] = Node::new();
        self.nodes[ROOT].suffix_link = Some(ROOT);
        self.edge_count = 0;
    }
}
