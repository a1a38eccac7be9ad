//! csr-graph-core: immutable Compressed Sparse Row graph engine.
//!
//! Turns a plain-text edge list into a directed graph stored as three flat
//! arrays (row offsets, targets, unit weights) and answers out-degree,
//! neighbor and depth-limited BFS queries directly over them.
//! No file handling or console output lives here: callers hand in an
//! already-opened line source or an in-memory edge sequence.
//!
//! ```
//! use csr_graph_core::{bfs, max_out_degree, parse_lines, CsrGraph};
//!
//! let batch = parse_lines(["# demo", "0 1", "0 2", "1 2"]);
//! let graph = CsrGraph::from_batch(&batch);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.neighbors(0), &[1, 2]);
//! assert_eq!(max_out_degree(&graph).map(|d| (d.node_id, d.out_degree)), Some((0, 2)));
//! assert_eq!(bfs(&graph, 0, 1).len(), 2);
//! ```

mod builder;
mod error;
mod graph;
mod parser;
mod traversal;

pub use builder::CsrBuilder;
pub use error::{check_depth, GraphError, Result};
pub use graph::{CsrGraph, Edge, NodeId, SparseGraph, UNIT_WEIGHT};
pub use parser::{parse_line, parse_lines, read_edges, EdgeBatch, EdgeStreamParser, COMMENT_PREFIX};
pub use traversal::{
    bfs, bfs_traversal, degree_ranking, max_out_degree, DegreeResult, TraversalResult,
};
