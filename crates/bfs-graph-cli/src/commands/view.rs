//! View command implementation.
//!
//! Launches the native egui window.

use anyhow::Result;
use bfs_graph_viz::{run_native, SettingsStyle};
use tracing::info;

use super::{build_machine, load_topology};
use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let topology = load_topology(config)?;
    let machine = build_machine(config, &topology)?;

    let style = SettingsStyle::default()
        .with_dark_mode(config.dark_mode)
        .with_node_radius(config.node_radius);

    info!(topology = %topology.name, "opening viewer");
    run_native(machine, topology.canvas, style)
        .map_err(|e| anyhow::anyhow!("Viewer failed: {e}"))
}
