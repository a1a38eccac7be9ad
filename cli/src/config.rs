use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub const DEFAULT_MAX_MEMORY_MB: u32 = 4096;

/// Load a whitespace-separated edge list and query it as a directed CSR graph.
#[derive(Debug, Parser)]
#[command(name = "csr-graph", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

/// Load-time settings. Each can also come from the environment.
#[derive(Debug, Clone, clap::Args)]
pub struct Settings {
    /// Edge-list file to load: one `source target` pair per line, `#` comments
    #[arg(env = "CSR_GRAPH_SOURCE")]
    pub source: PathBuf,

    /// Memory cap for the built graph (MB); loading fails above it
    #[arg(
        long,
        env = "CSR_GRAPH_MAX_MEMORY_MB",
        default_value_t = DEFAULT_MAX_MEMORY_MB,
        value_parser = clap::value_parser!(u32).range(64..=131_072),
    )]
    pub max_memory_mb: u32,

    /// Reject inputs whose id space exceeds this many nodes, before building
    #[arg(long, env = "CSR_GRAPH_MAX_NODES")]
    pub max_nodes: Option<usize>,

    /// Output format
    #[arg(long, value_enum, env = "CSR_GRAPH_FORMAT", default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    /// Graphviz digraph (neighbors and bfs only)
    Dot,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Node/edge counts, memory and load time
    Status,
    /// Node with the largest out-degree (lowest id wins ties)
    MaxDegree,
    /// Nodes ranked by out-degree
    Degree {
        /// How many nodes to list; 0 lists all
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Sorted out-neighbors of a node
    Neighbors {
        #[arg(allow_negative_numbers = true)]
        node: i64,
    },
    /// Edges traversed by a breadth-first search bounded by depth
    Bfs {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        depth: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["csr-graph", "web.txt", "status"]).unwrap();
        assert_eq!(cli.settings.source, PathBuf::from("web.txt"));
        assert_eq!(cli.settings.max_memory_mb, DEFAULT_MAX_MEMORY_MB);
        assert_eq!(cli.settings.max_nodes, None);
        assert_eq!(cli.settings.format, Format::Text);
        assert!(matches!(cli.command, Command::Status));
    }

    #[test]
    fn test_bfs_args() {
        let cli =
            Cli::try_parse_from(["csr-graph", "--format", "dot", "g.txt", "bfs", "3", "--depth", "4"])
                .unwrap();
        assert_eq!(cli.settings.format, Format::Dot);
        assert!(matches!(cli.command, Command::Bfs { start: 3, depth: 4 }));
    }

    #[test]
    fn test_negative_depth_reaches_validation() {
        let cli = Cli::try_parse_from(["csr-graph", "g.txt", "bfs", "0", "--depth", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::Bfs { depth: -1, .. }));
    }

    #[test]
    fn test_memory_cap_range() {
        assert!(Cli::try_parse_from(["csr-graph", "--max-memory-mb", "8", "g.txt", "status"]).is_err());
        let cli =
            Cli::try_parse_from(["csr-graph", "--max-memory-mb", "64", "g.txt", "status"]).unwrap();
        assert_eq!(cli.settings.max_memory_mb, 64);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
