use std::fmt::Write;

use csr_graph_core::{bfs_traversal, check_depth, TraversalResult};

use crate::config::Format;
use crate::load::LoadedGraph;
use crate::output;
use crate::util::to_node_id;

pub fn run(lg: &LoadedGraph, start: i64, depth: i64, format: Format) -> anyhow::Result<String> {
    let max_depth = check_depth(depth, "depth")?;

    let result = match to_node_id(start) {
        Some(id) => bfs_traversal(&lg.graph, id, max_depth),
        None => TraversalResult::default(),
    };

    match format {
        Format::Json => output::json(&result),
        Format::Dot => Ok(output::dot("bfs", to_node_id(start), &result.edges)),
        Format::Text => {
            let mut out = format!(
                "{} edges, {} nodes reached from {} within depth {}",
                result.edges.len(),
                result.nodes_visited,
                start,
                max_depth
            );
            for e in &result.edges {
                let _ = write!(out, "\n{} -> {}", e.source, e.target);
            }
            Ok(out)
        }
    }
}
