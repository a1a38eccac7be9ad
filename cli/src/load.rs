use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use csr_graph_core::{read_edges, CsrBuilder, CsrGraph};

use crate::config::Settings;

/// A built graph plus what the status command reports about its load.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: CsrGraph,
    pub source: PathBuf,
    pub load_time_ms: f64,
    /// Lines that were neither edges, blanks nor comments.
    pub skipped_lines: usize,
}

/// Open `settings.source` and build the graph from it.
///
/// A missing or unreadable file is an error. A readable file with no edges
/// loads successfully as the empty graph.
pub fn load_graph(settings: &Settings) -> anyhow::Result<LoadedGraph> {
    let file = File::open(&settings.source)
        .with_context(|| format!("cannot open edge list '{}'", settings.source.display()))?;
    load_from_reader(BufReader::new(file), &settings.source, settings)
}

pub fn load_from_reader<R: BufRead>(
    reader: R,
    source: &Path,
    settings: &Settings,
) -> anyhow::Result<LoadedGraph> {
    let start = Instant::now();
    tracing::info!(source = %source.display(), "loading edge list");

    let batch = read_edges(reader)
        .with_context(|| format!("failed reading edge list '{}'", source.display()))?;

    if let Some(limit) = settings.max_nodes {
        batch.check_node_limit(limit)?;
    }

    let max_mb = settings.max_memory_mb as usize;

    // Reject before allocating: a single huge id sizes the whole node table.
    let estimate_mb =
        CsrBuilder::estimated_bytes(batch.node_count(), batch.edges.len()) / (1024 * 1024);
    if estimate_mb > max_mb {
        bail!(
            "edge list needs an estimated {}MB to build ({} nodes, {} edges), exceeds max_memory_mb={}MB",
            estimate_mb,
            batch.node_count(),
            batch.edges.len(),
            max_mb
        );
    }

    let graph = CsrGraph::from_batch(&batch);

    let memory_mb = graph.memory_usage() / (1024 * 1024);
    if memory_mb > max_mb {
        bail!(
            "loaded graph uses {}MB, exceeds max_memory_mb={}MB",
            memory_mb,
            max_mb
        );
    }

    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    if graph.is_empty() {
        tracing::warn!(source = %source.display(), "edge list contains no edges; graph is empty");
    } else {
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped = batch.skipped_lines,
            load_time_ms,
            "load complete"
        );
    }

    Ok(LoadedGraph {
        graph,
        source: source.to_path_buf(),
        load_time_ms,
        skipped_lines: batch.skipped_lines,
    })
}

#[cfg(test)]
pub(crate) fn test_settings(source: &str) -> Settings {
    Settings {
        source: PathBuf::from(source),
        max_memory_mb: crate::config::DEFAULT_MAX_MEMORY_MB,
        max_nodes: None,
        format: crate::config::Format::Text,
    }
}

#[cfg(test)]
pub(crate) fn loaded(text: &str) -> LoadedGraph {
    let settings = test_settings("mem.txt");
    load_from_reader(std::io::Cursor::new(text.to_string()), Path::new("mem.txt"), &settings)
        .expect("in-memory load")
}
