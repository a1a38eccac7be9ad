use std::io::BufRead;

use crate::error::Result;
use crate::graph::{Edge, NodeId};

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

/// Edges parsed from a line source, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeBatch {
    pub edges: Vec<Edge>,
    /// Largest id seen on either endpoint. `None` when no edge was parsed.
    pub max_node_id: Option<NodeId>,
    /// Non-blank, non-comment lines that did not hold two integers.
    pub skipped_lines: usize,
}

impl EdgeBatch {
    /// Size of the dense id space `0..=max_node_id`.
    pub fn node_count(&self) -> usize {
        self.max_node_id.map_or(0, |id| id as usize + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Reject batches whose id space exceeds `limit` nodes.
    pub fn check_node_limit(&self, limit: usize) -> Result<()> {
        let node_count = self.node_count();
        if node_count > limit {
            return Err(crate::GraphError::NodeLimitExceeded { node_count, limit });
        }
        Ok(())
    }
}

/// Parse one edge-list line.
///
/// Returns `None` for blank lines, comments, and anything whose first two
/// whitespace-separated fields are not non-negative integers. Each of those
/// two fields must be a whole token, so `1 2abc` is rejected rather than read
/// as `(1, 2)`. Fields past the second (e.g. a weight column) are ignored.
pub fn parse_line(line: &str) -> Option<Edge> {
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }
    let mut fields = line.split_whitespace();
    let source: NodeId = fields.next()?.parse().ok()?;
    let target: NodeId = fields.next()?.parse().ok()?;
    Some(Edge::new(source, target))
}

/// Incremental line-to-edge parser. Feed lines, then `finish` for the batch.
#[derive(Debug, Default)]
pub struct EdgeStreamParser {
    batch: EdgeBatch,
    lines_read: usize,
}

impl EdgeStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines_read += 1;
        match parse_line(line) {
            Some(edge) => {
                let hi = edge.source.max(edge.target);
                self.batch.max_node_id = Some(self.batch.max_node_id.map_or(hi, |m| m.max(hi)));
                self.batch.edges.push(edge);
            }
            None => {
                if !is_ignorable(line) {
                    tracing::trace!(line_no = self.lines_read, line, "skipping malformed line");
                    self.batch.skipped_lines += 1;
                }
            }
        }
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn finish(self) -> EdgeBatch {
        if self.batch.skipped_lines > 0 {
            tracing::debug!(
                skipped = self.batch.skipped_lines,
                lines = self.lines_read,
                "malformed lines skipped"
            );
        }
        self.batch
    }
}

fn is_ignorable(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(COMMENT_PREFIX)
}

/// Parse an in-memory sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> EdgeBatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = EdgeStreamParser::new();
    for line in lines {
        parser.push_line(line.as_ref());
    }
    parser.finish()
}

/// Parse an already-opened line source.
///
/// A read failure is an error, distinct from a source that simply holds no
/// edges (which yields an empty batch).
pub fn read_edges<R: BufRead>(reader: R) -> Result<EdgeBatch> {
    let mut parser = EdgeStreamParser::new();
    for line in reader.lines() {
        parser.push_line(&line?);
    }
    Ok(parser.finish())
}
