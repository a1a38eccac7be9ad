use thiserror::Error;

/// Errors surfaced by the graph engine.
///
/// Queries never fail on data content: out-of-range ids and empty graphs have
/// defined empty results. Only the line source and caller preconditions can
/// produce an error.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The underlying line source failed while being read.
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied argument violates a precondition (e.g. negative depth).
    #[error("{name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    /// The edge batch would produce more nodes than the caller allows.
    #[error("graph has {node_count} nodes, exceeds limit of {limit}")]
    NodeLimitExceeded { node_count: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Validate a depth/hops argument coming from a signed source.
///
/// Values above `u32::MAX` saturate: no graph has that many levels.
pub fn check_depth(value: i64, name: &'static str) -> Result<u32> {
    if value < 0 {
        return Err(GraphError::InvalidArgument { name, value });
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}
