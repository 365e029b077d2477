//! Native desktop runner for bfs-graph-viz development.
//!
//! Run with: cargo run --example native --features native
//! With a custom topology: cargo run --example native --features native -- --topology graph.json

use std::path::PathBuf;

use bfs_graph_core::{Graph, SelectionMachine, Topology};
use bfs_graph_viz::{run_native, SettingsStyle};

fn main() -> eframe::Result<()> {
    // Initialize tracing for native development
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::from_default_env()
                    .add_directive("bfs_graph_viz=debug".parse().unwrap())
                    .add_directive("bfs_graph_core=debug".parse().unwrap()),
            )
            .init();
    }

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut topology_path: Option<PathBuf> = None;
    let mut dark_mode = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--topology" | "-t" => {
                if i + 1 < args.len() {
                    topology_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --topology requires a path argument");
                    std::process::exit(1);
                }
            }
            "--dark" => {
                dark_mode = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("BFS Graph Viz - Native Development Runner");
                println!();
                println!("Usage: native [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --topology, -t <PATH>  Load graph topology from a JSON file");
                println!("  --dark                 Start in dark mode");
                println!("  --help, -h             Show this help message");
                println!();
                println!("Keyboard Shortcuts:");
                println!("  Tab         Toggle sidebar");
                println!("  Esc         Clear the selection");
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let topology = match &topology_path {
        Some(path) => Topology::load(path).unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }),
        None => Topology::reference(),
    };

    let graph = Graph::from_topology(&topology).unwrap_or_else(|err| {
        eprintln!("Error: invalid topology: {err}");
        std::process::exit(1);
    });

    run_native(
        SelectionMachine::new(graph),
        topology.canvas,
        SettingsStyle::default().with_dark_mode(dark_mode),
    )
}
