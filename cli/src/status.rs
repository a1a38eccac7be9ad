use serde::Serialize;

use crate::config::Format;
use crate::load::LoadedGraph;
use crate::output;

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub source: String,
    /// "loaded", or "empty" when the source held no edges.
    pub status: &'static str,
    pub node_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub skipped_lines: usize,
    pub load_time_ms: f64,
}

pub fn report(lg: &LoadedGraph) -> StatusReport {
    StatusReport {
        source: lg.source.display().to_string(),
        status: if lg.graph.is_empty() { "empty" } else { "loaded" },
        node_count: lg.graph.node_count(),
        edge_count: lg.graph.edge_count(),
        memory_bytes: lg.graph.memory_usage(),
        skipped_lines: lg.skipped_lines,
        load_time_ms: lg.load_time_ms,
    }
}

pub fn run(lg: &LoadedGraph, format: Format) -> anyhow::Result<String> {
    output::reject_dot(format, "status")?;
    let r = report(lg);
    match format {
        Format::Json => output::json(&r),
        _ => Ok(format!(
            "source: {}\nstatus: {}\nnodes: {}\nedges: {}\nmemory: {} bytes\nskipped lines: {}\nload time: {:.1}ms",
            r.source, r.status, r.node_count, r.edge_count, r.memory_bytes, r.skipped_lines, r.load_time_ms
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::loaded;

    #[test]
    fn test_status_loaded() {
        let r = report(&loaded("0 1\n0 2\n1 2\nxx\n"));
        assert_eq!(r.status, "loaded");
        assert_eq!(r.node_count, 3);
        assert_eq!(r.edge_count, 3);
        assert_eq!(r.skipped_lines, 1);
        assert!(r.memory_bytes > 0);
    }

    #[test]
    fn test_status_empty() {
        let r = report(&loaded("# only comments\n"));
        assert_eq!(r.status, "empty");
        assert_eq!(r.node_count, 0);
        assert_eq!(r.edge_count, 0);
    }

    #[test]
    fn test_status_text_and_json() {
        let lg = loaded("0 1\n");
        let text = run(&lg, Format::Text).unwrap();
        assert!(text.contains("nodes: 2"));
        assert!(text.contains("edges: 1"));

        let v: serde_json::Value = serde_json::from_str(&run(&lg, Format::Json).unwrap()).unwrap();
        assert_eq!(v["status"], "loaded");
        assert_eq!(v["node_count"], 2);
    }

    #[test]
    fn test_status_rejects_dot() {
        assert!(run(&loaded("0 1\n"), Format::Dot).is_err());
    }
}
