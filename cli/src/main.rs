//! csr-graph: command-line front end for csr-graph-core.
//!
//! Owns everything the core leaves to its caller: argument and environment
//! handling, opening the edge-list file, log output, and rendering results
//! as text, JSON or Graphviz.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bfs;
mod config;
mod degree;
mod load;
mod neighbors;
mod output;
mod status;
mod util;

use config::{Cli, Command};
use load::LoadedGraph;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let lg = load::load_graph(&cli.settings)?;
    let out = dispatch(&lg, &cli)?;
    println!("{out}");
    Ok(())
}

fn dispatch(lg: &LoadedGraph, cli: &Cli) -> anyhow::Result<String> {
    let format = cli.settings.format;
    match cli.command {
        Command::Status => status::run(lg, format),
        Command::MaxDegree => degree::run_max(lg, format),
        Command::Degree { top } => degree::run_ranking(lg, top, format),
        Command::Neighbors { node } => neighbors::run(lg, node, format),
        Command::Bfs { start, depth } => bfs::run(lg, start, depth, format),
    }
}
