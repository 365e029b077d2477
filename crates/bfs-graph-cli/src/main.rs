//! bfsg - breadth-first shortest paths on a small undirected graph.
//!
//! Opens the interactive viewer by default; the other subcommands run the
//! same search and selection logic headlessly.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::{config as config_cmd, path::OutputFormat};
use config::Config;

/// BFS graph visualizer: click two nodes, see the shortest path.
///
/// Run `bfsg` to open the viewer on the reference graph.
#[derive(Parser, Debug)]
#[command(
    name = "bfsg",
    author,
    version,
    about = "BFS pathfinding visualizer and shortest-path queries",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Topology JSON file (overrides config and BFSG_TOPOLOGY).
    #[arg(short, long, global = true)]
    topology: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive viewer (default command).
    View {
        /// Start in dark mode.
        #[arg(long)]
        dark: bool,

        /// Node radius in canvas units.
        #[arg(long)]
        radius: Option<f32>,
    },

    /// Print the shortest path between two nodes.
    Path {
        /// Start node label.
        start: String,

        /// End node label.
        end: String,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Feed a sequence of node clicks through the selection machine.
    Replay {
        /// Node labels, in click order.
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Print the active topology as JSON.
    Topology {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(path) = cli.topology {
        config.topology_path = Some(path);
    }

    // Default to the viewer if no command given
    let command = cli.command.unwrap_or(Commands::View {
        dark: false,
        radius: None,
    });

    match command {
        Commands::View { dark, radius } => {
            if dark {
                config.dark_mode = true;
            }
            if let Some(radius) = radius {
                config.node_radius = radius;
            }
            commands::view::execute(&config)?;
        }

        Commands::Path { start, end, format } => {
            let format: OutputFormat = format.parse()?;
            commands::path::execute(&config, &start, &end, format)?;
        }

        Commands::Replay { labels } => {
            commands::replay::execute(&config, &labels)?;
        }

        Commands::Topology { output } => {
            commands::topology::execute(&config, output)?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&config)?;
            }
            ConfigCommands::Set { key, value } => {
                // Persist only what the file holds, not env or CLI overrides.
                let mut stored = match Config::config_file_path() {
                    Some(path) => Config::load_file(&path)?,
                    None => Config::default(),
                };
                config_cmd::set(&mut stored, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&config, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                if let Some(path) = Config::config_file_path() {
                    println!("{}", path.display());
                } else {
                    println!("(no config file path available)");
                }
            }
        },
    }

    Ok(())
}
