//! Externally supplied graph topology.
//!
//! A topology lists node labels (optionally with positions) and undirected
//! edges. It is loaded from JSON or taken from [`Topology::reference`], and
//! turned into a [`Graph`] once at startup.
//!
//! ```json
//! {
//!   "name": "triangle",
//!   "nodes": [{ "label": "A" }, { "label": "B" }, { "label": "C", "position": { "x": 10, "y": 20 } }],
//!   "edges": [["A", "B"], ["B", "C"]]
//! }
//! ```

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::layout::circle_positions;
use crate::types::{Node, NodeId, Position};

const REFERENCE_LABELS: [&str; 13] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
];

const REFERENCE_EDGES: [(&str, &str); 16] = [
    ("A", "B"),
    ("B", "C"),
    ("C", "D"),
    ("D", "E"),
    ("E", "A"),
    ("E", "B"),
    ("B", "D"),
    ("B", "F"),
    ("F", "G"),
    ("G", "A"),
    ("G", "H"),
    ("H", "D"),
    ("H", "B"),
    ("M", "A"),
    ("M", "B"),
    ("M", "C"),
];

/// Full topology description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    /// Human readable name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Logical drawing area the positions live in.
    #[serde(default)]
    pub canvas: CanvasSize,
    /// Circle used to place nodes that have no explicit position.
    #[serde(default)]
    pub layout: CircleLayout,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

fn default_name() -> String {
    "custom".to_string()
}

/// A node entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// An undirected edge entry, written as `["A", "B"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec(pub String, pub String);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleLayout {
    pub center: Position,
    pub radius: f32,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            center: Position::new(500.0, 400.0),
            radius: 250.0,
        }
    }
}

impl Topology {
    /// The demo graph: thirteen nodes A..M on a circle with a fixed edge list.
    /// I..L are left unconnected.
    pub fn reference() -> Self {
        Self {
            name: "reference".to_string(),
            canvas: CanvasSize::default(),
            layout: CircleLayout::default(),
            nodes: REFERENCE_LABELS
                .iter()
                .map(|label| NodeSpec {
                    label: label.to_string(),
                    position: None,
                })
                .collect(),
            edges: REFERENCE_EDGES
                .iter()
                .map(|(a, b)| EdgeSpec(a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// Parse a topology from JSON.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let topology: Topology = serde_json::from_str(json)?;
        if topology.nodes.is_empty() {
            return Err(GraphError::invalid_argument("topology has no nodes"));
        }
        Ok(topology)
    }

    /// Load a topology from a JSON file.
    pub fn load(path: &FsPath) -> GraphResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let topology = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            nodes = topology.nodes.len(),
            edges = topology.edges.len(),
            "topology loaded"
        );
        Ok(topology)
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Node positions, filling missing ones from the circle layout by node index.
    pub fn resolved_positions(&self) -> Vec<Position> {
        let circle = circle_positions(self.nodes.len(), self.layout.center, self.layout.radius);
        self.nodes
            .iter()
            .zip(circle)
            .map(|(spec, fallback)| spec.position.unwrap_or(fallback))
            .collect()
    }

    /// Build the graph. Any error here is a configuration bug.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();

        for (spec, position) in self.nodes.iter().zip(self.resolved_positions()) {
            if spec.label.trim().is_empty() {
                return Err(GraphError::invalid_argument("node label must not be empty"));
            }
            graph.add_node(Node::new(spec.label.as_str(), position))?;
        }

        for EdgeSpec(a, b) in &self.edges {
            graph.add_edge(&NodeId::new(a.as_str()), &NodeId::new(b.as_str()))?;
        }

        Ok(graph)
    }
}

impl Graph {
    /// Build a graph from injected topology configuration.
    pub fn from_topology(topology: &Topology) -> GraphResult<Graph> {
        topology.build()
    }
}
