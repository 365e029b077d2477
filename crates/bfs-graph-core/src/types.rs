//! Value types shared by the graph model, pathfinder and presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for nodes, compared by value.
///
/// Wraps the node's unique label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node identifier from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label this identifier wraps.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Identifier for edges: the index at which the edge was inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

/// 2D position of a node on the logical canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_sq(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Presentation state of a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeDisplay {
    #[default]
    Default,
    /// Chosen as the start of the search.
    Start,
    /// Chosen as the end of the search.
    End,
    /// Part of the highlighted shortest path.
    OnPath,
}

impl NodeDisplay {
    /// Get a display label for the state.
    pub fn label(&self) -> &'static str {
        match self {
            NodeDisplay::Default => "default",
            NodeDisplay::Start => "start",
            NodeDisplay::End => "end",
            NodeDisplay::OnPath => "on path",
        }
    }
}

/// Presentation state of an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDisplay {
    #[default]
    Default,
    /// Joins two consecutive nodes of the highlighted path.
    OnPath,
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identity.
    pub id: NodeId,
    /// Where the presentation layer draws the node.
    pub position: Position,
    /// Current presentation state.
    #[serde(default)]
    pub display: NodeDisplay,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            display: NodeDisplay::Default,
        }
    }

    /// Point-in-circle containment using squared distances.
    pub fn contains(&self, point: Position, radius: f32) -> bool {
        self.position.distance_sq(point) <= radius * radius
    }
}

/// An undirected edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: NodeId,
    pub b: NodeId,
    #[serde(default)]
    pub display: EdgeDisplay,
}

impl Edge {
    /// Whether this edge joins `x` and `y`, in either orientation.
    pub fn joins(&self, x: &NodeId, y: &NodeId) -> bool {
        (&self.a == x && &self.b == y) || (&self.a == y && &self.b == x)
    }
}
