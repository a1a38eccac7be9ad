use csr_graph_core::NodeId;

/// Map a node id typed on the command line into the graph's id type.
///
/// Negative or oversized values are just out-of-range ids: they resolve to
/// `None` and the query yields an empty result rather than an error.
pub fn to_node_id(raw: i64) -> Option<NodeId> {
    NodeId::try_from(raw).ok()
}
