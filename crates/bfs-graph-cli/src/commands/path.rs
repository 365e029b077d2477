//! Path command implementation.
//!
//! Runs the breadth-first search between two labels and prints the result.

use anyhow::{Context, Result};
use bfs_graph_core::{shortest_path, Graph, NodeId, Path};
use serde_json::json;
use tracing::info;

use super::load_topology;
use crate::config::Config;

/// Output format for a path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'text' or 'json'", s),
        }
    }
}

/// Print the shortest path between `start` and `end`.
pub fn execute(config: &Config, start: &str, end: &str, format: OutputFormat) -> Result<()> {
    let topology = load_topology(config)?;
    let graph = Graph::from_topology(&topology)?;

    let path = find(&graph, start, end)?;
    info!(%start, %end, hops = path.hops(), "path found");

    println!("{}", render(&path, format)?);
    Ok(())
}

pub fn find(graph: &Graph, start: &str, end: &str) -> Result<Path> {
    let start = NodeId::new(start);
    let end = NodeId::new(end);
    shortest_path(graph, &start, &end)
        .with_context(|| format!("Path query {start} -> {end} failed"))
}

pub fn render(path: &Path, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{} ({} hops)", path, path.hops())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "start": path.start(),
            "end": path.end(),
            "path": path,
            "hops": path.hops(),
        }))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfs_graph_core::Topology;

    fn reference() -> Graph {
        Graph::from_topology(&Topology::reference()).unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text() {
        let path = find(&reference(), "A", "D").unwrap();
        assert_eq!(render(&path, OutputFormat::Text).unwrap(), "A → B → D (2 hops)");
    }

    #[test]
    fn test_render_json() {
        let path = find(&reference(), "F", "C").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render(&path, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["start"], "F");
        assert_eq!(value["end"], "C");
        assert_eq!(value["path"], json!(["F", "B", "C"]));
        assert_eq!(value["hops"], 2);
    }

    #[test]
    fn test_unreachable_reports_both_labels() {
        let err = find(&reference(), "A", "I").unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("no path exists between A and I"), "{chain}");
    }
}
