use std::fmt::Write;

use anyhow::{bail, Context};
use csr_graph_core::Edge;
use serde::Serialize;

use crate::config::Format;

pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Render edges as a Graphviz digraph. `highlight` is drawn filled.
pub fn dot(name: &str, highlight: Option<u32>, edges: &[Edge]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph {name} {{");
    if let Some(node) = highlight {
        let _ = writeln!(out, "    {node} [style=filled];");
    }
    for e in edges {
        let _ = writeln!(out, "    {} -> {};", e.source, e.target);
    }
    out.push('}');
    out
}

pub fn reject_dot(format: Format, command: &str) -> anyhow::Result<()> {
    if format == Format::Dot {
        bail!("dot output is not available for '{command}'; use text or json");
    }
    Ok(())
}
