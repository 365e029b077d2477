//! Command implementations for the bfsg CLI.

pub mod config;
pub mod path;
pub mod replay;
pub mod topology;
pub mod view;

use anyhow::{Context, Result};
use bfs_graph_core::{Graph, SelectionMachine, SelectionOptions, Topology};
use tracing::debug;

use crate::config::Config;

/// Load the configured topology, or the reference graph when none is set.
pub fn load_topology(config: &Config) -> Result<Topology> {
    match &config.topology_path {
        Some(path) => Topology::load(path)
            .with_context(|| format!("Failed to load topology from {}", path.display())),
        None => {
            debug!("using reference topology");
            Ok(Topology::reference())
        }
    }
}

/// Build a selection machine over the configured topology.
pub fn build_machine(config: &Config, topology: &Topology) -> Result<SelectionMachine> {
    let graph = Graph::from_topology(topology)
        .with_context(|| format!("Invalid topology '{}'", topology.name))?;
    Ok(SelectionMachine::with_options(
        graph,
        SelectionOptions {
            highlight_endpoints: config.highlight_endpoints,
        },
    ))
}
