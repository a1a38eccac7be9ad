use serde::Serialize;

use crate::builder::CsrBuilder;

/// Dense node identifier; doubles as the row index into the CSR arrays.
pub type NodeId = u32;

/// Weight stored for every edge. Reserved for a weighted extension; no query reads it.
pub const UNIT_WEIGHT: u32 = 1;

/// A directed edge `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((source, target): (NodeId, NodeId)) -> Self {
        Self { source, target }
    }
}

impl From<Edge> for (NodeId, NodeId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// Capability set shared by graph representations.
///
/// Traversal algorithms are written against this trait only, so another
/// representation (e.g. a dense matrix) can slot in without touching them.
pub trait SparseGraph {
    /// Build a graph from a complete batch of edges.
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
        Self: Sized;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Sorted out-neighbors of `node`, with multiplicity. Empty if `node` is out of range.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }
}

/// Immutable directed graph in Compressed Sparse Row form.
///
/// Node `i`'s out-neighbors are `targets[row_offsets[i]..row_offsets[i + 1]]`,
/// sorted ascending. `weights` runs parallel to `targets` and is always
/// [`UNIT_WEIGHT`]. Built once through [`CsrBuilder`]; there is no mutation
/// path, so shared references can be queried from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    row_offsets: Vec<usize>,
    targets: Vec<NodeId>,
    weights: Vec<u32>,
}

impl CsrGraph {
    /// Assemble from finished arrays. Only the builder calls this.
    pub(crate) fn from_parts(
        row_offsets: Vec<usize>,
        targets: Vec<NodeId>,
        weights: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(row_offsets.first(), Some(&0));
        debug_assert_eq!(row_offsets.last(), Some(&targets.len()));
        debug_assert_eq!(targets.len(), weights.len());
        Self {
            row_offsets,
            targets,
            weights,
        }
    }

    /// Zero nodes, zero edges.
    pub fn empty() -> Self {
        Self::from_parts(vec![0], Vec::new(), Vec::new())
    }

    /// Build from any iterator of edges. Node count is `max endpoint + 1`.
    pub fn build<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut builder = CsrBuilder::new();
        builder.extend(edges);
        builder.build()
    }

    pub fn node_count(&self) -> usize {
        self.row_offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }

    /// Sorted out-neighbors of `node`. Out-of-range ids yield an empty slice.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.row_range(node) {
            Some((start, end)) => &self.targets[start..end],
            None => &[],
        }
    }

    /// Out-degree in O(1) from the offsets. 0 for out-of-range ids.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.row_range(node).map_or(0, |(start, end)| end - start)
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        size_of::<Self>()
            + self.row_offsets.len() * size_of::<usize>()
            + self.targets.len() * size_of::<NodeId>()
            + self.weights.len() * size_of::<u32>()
    }

    fn row_range(&self, node: NodeId) -> Option<(usize, usize)> {
        let i = node as usize;
        if i >= self.node_count() {
            return None;
        }
        Some((self.row_offsets[i], self.row_offsets[i + 1]))
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl SparseGraph for CsrGraph {
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        Self::build(edges)
    }

    fn node_count(&self) -> usize {
        CsrGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        CsrGraph::edge_count(self)
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        CsrGraph::neighbors(self, node)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        CsrGraph::out_degree(self, node)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        CsrGraph::contains_node(self, node)
    }
}
