use std::fmt::Write;

use csr_graph_core::{degree_ranking, max_out_degree};

use crate::config::Format;
use crate::load::LoadedGraph;
use crate::output;

pub fn run_max(lg: &LoadedGraph, format: Format) -> anyhow::Result<String> {
    output::reject_dot(format, "max-degree")?;
    let best = max_out_degree(&lg.graph);
    match format {
        Format::Json => output::json(&best),
        _ => Ok(match best {
            Some(d) => format!("node {} has the highest out-degree: {}", d.node_id, d.out_degree),
            None => "graph is empty: no nodes".to_string(),
        }),
    }
}

pub fn run_ranking(lg: &LoadedGraph, top: usize, format: Format) -> anyhow::Result<String> {
    output::reject_dot(format, "degree")?;
    let results = degree_ranking(&lg.graph, top);
    match format {
        Format::Json => output::json(&results),
        _ => {
            let mut out = format!("{:>10} {:>10}", "node", "out_degree");
            for d in &results {
                let _ = write!(out, "\n{:>10} {:>10}", d.node_id, d.out_degree);
            }
            Ok(out)
        }
    }
}
