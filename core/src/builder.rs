use crate::graph::{CsrGraph, Edge, NodeId, UNIT_WEIGHT};
use crate::parser::EdgeBatch;

/// Mutable staging area that freezes into a [`CsrGraph`].
///
/// Holds one growable neighbor list per node. The node space grows to cover
/// the largest endpoint seen, so `build` yields `max id + 1` nodes even when
/// the largest id only ever appears as a target.
#[derive(Debug, Default)]
pub struct CsrBuilder {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
    /// Expected edge total, used to pre-size the frozen target array.
    edge_capacity: usize,
}

impl CsrBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known node count and edge total. Capacity only:
    /// no node exists until an edge or `reserve_nodes` creates it.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(node_count),
            edge_count: 0,
            edge_capacity: edge_count,
        }
    }

    /// Rough peak bytes for building `node_count` nodes and `edge_count`
    /// edges: staging lists plus the frozen arrays. Saturates on overflow.
    pub fn estimated_bytes(node_count: usize, edge_count: usize) -> usize {
        use std::mem::size_of;

        let per_node = size_of::<Vec<NodeId>>() + size_of::<usize>();
        let per_edge = 2 * size_of::<NodeId>() + size_of::<u32>();
        node_count
            .saturating_add(1)
            .saturating_mul(per_node)
            .saturating_add(edge_count.saturating_mul(per_edge))
    }

    /// Make sure ids `0..node_count` exist, even if no edge touches them.
    pub fn reserve_nodes(&mut self, node_count: usize) {
        if self.adjacency.len() < node_count {
            self.adjacency.resize_with(node_count, Vec::new);
        }
    }

    /// Record `source -> target`. Only the forward direction is stored.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        let needed = source.max(target) as usize + 1;
        self.reserve_nodes(needed);
        self.adjacency[source as usize].push(target);
        self.edge_count += 1;
    }

    pub fn extend<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for edge in edges {
            let edge = edge.into();
            self.add_edge(edge.source, edge.target);
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Freeze into CSR form.
    ///
    /// Rows are emitted in ascending node order, each sorted ascending, so
    /// the result depends only on the edge multiset and not on input order.
    /// The temporary lists are dropped as they are consumed.
    pub fn build(self) -> CsrGraph {
        let node_count = self.adjacency.len();
        let mut row_offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(self.edge_count.max(self.edge_capacity));

        for mut row in self.adjacency {
            row.sort_unstable();
            row_offsets.push(targets.len());
            targets.extend_from_slice(&row);
        }
        row_offsets.push(targets.len());

        let weights = vec![UNIT_WEIGHT; targets.len()];

        tracing::debug!(
            nodes = node_count,
            edges = targets.len(),
            "CSR structure built"
        );

        CsrGraph::from_parts(row_offsets, targets, weights)
    }
}

impl CsrGraph {
    /// Build from a parsed batch. The node space is sized from the batch's
    /// max observed id; an empty batch yields the empty graph.
    pub fn from_batch(batch: &EdgeBatch) -> Self {
        let mut builder = CsrBuilder::with_capacity(batch.node_count(), batch.edges.len());
        builder.reserve_nodes(batch.node_count());
        builder.extend(batch.edges.iter().copied());
        builder.build()
    }
}
