use csr_graph_core::{Edge, NodeId};

use crate::config::Format;
use crate::load::LoadedGraph;
use crate::output;
use crate::util::to_node_id;

pub fn run(lg: &LoadedGraph, node: i64, format: Format) -> anyhow::Result<String> {
    let neighbors: &[NodeId] = match to_node_id(node) {
        Some(id) => lg.graph.neighbors(id),
        None => &[],
    };

    match format {
        Format::Json => output::json(&neighbors),
        Format::Dot => {
            let edges: Vec<Edge> = to_node_id(node)
                .map(|id| neighbors.iter().map(|&t| Edge::new(id, t)).collect())
                .unwrap_or_default();
            Ok(output::dot("neighbors", to_node_id(node), &edges))
        }
        Format::Text => Ok(neighbors
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
    }
}
