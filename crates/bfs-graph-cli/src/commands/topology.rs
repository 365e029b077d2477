//! Topology command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bfs_graph_core::Graph;
use tracing::info;

use super::load_topology;
use crate::config::Config;

/// Print or write the active topology after checking that it builds.
pub fn execute(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let topology = load_topology(config)?;
    let graph = Graph::from_topology(&topology)
        .with_context(|| format!("Invalid topology '{}'", topology.name))?;
    let json = topology.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "topology written");
            println!(
                "✅ Wrote {} ({} nodes, {} edges) to {}",
                topology.name,
                graph.node_count(),
                graph.edge_count(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
