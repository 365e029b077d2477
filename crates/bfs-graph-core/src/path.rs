//! Breadth-first shortest path search with parent tracking.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::types::NodeId;

/// Ordered sequence of nodes from start to end, both inclusive.
///
/// Serialized as a plain list of labels; an empty list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>")]
pub struct Path(Vec<NodeId>);

impl Path {
    /// First node. Paths are never empty.
    pub fn start(&self) -> &NodeId {
        &self.0[0]
    }

    /// Last node.
    pub fn end(&self) -> &NodeId {
        &self.0[self.0.len() - 1]
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Paths always hold at least one node.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    /// Consecutive node pairs along the path.
    pub fn steps(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.0.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl TryFrom<Vec<NodeId>> for Path {
    type Error = GraphError;

    fn try_from(nodes: Vec<NodeId>) -> GraphResult<Self> {
        if nodes.is_empty() {
            return Err(GraphError::invalid_argument("a path needs at least one node"));
        }
        Ok(Path(nodes))
    }
}

impl From<Path> for Vec<NodeId> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Compute the fewest-edge path from `start` to `end`.
///
/// Neighbors are expanded in adjacency insertion order, so among several
/// shortest paths the result depends only on the order edges were added.
pub fn shortest_path(graph: &Graph, start: &NodeId, end: &NodeId) -> GraphResult<Path> {
    for endpoint in [start, end] {
        if !graph.contains(endpoint) {
            return Err(GraphError::not_found(endpoint));
        }
    }

    let mut parents: HashMap<&NodeId, Option<&NodeId>> = HashMap::new();
    let mut visited: HashSet<&NodeId> = HashSet::new();
    let mut frontier: VecDeque<&NodeId> = VecDeque::new();

    parents.insert(start, None);
    visited.insert(start);
    frontier.push_back(start);

    let mut expanded = 0usize;
    while let Some(current) = frontier.pop_front() {
        if current == end {
            break;
        }
        expanded += 1;

        for neighbor in graph.neighbors_of(current)? {
            if visited.insert(neighbor) {
                parents.insert(neighbor, Some(current));
                frontier.push_back(neighbor);
            }
        }
    }

    if !parents.contains_key(end) {
        debug!(%start, %end, expanded, "end not reachable");
        return Err(GraphError::NoPathFound {
            start: start.clone(),
            end: end.clone(),
        });
    }

    let path = reconstruct(&parents, end);
    debug!(%start, %end, expanded, hops = path.hops(), "shortest path found");
    Ok(path)
}

/// Walk parent links backwards from `end` until a node without a parent.
fn reconstruct<'a>(parents: &HashMap<&'a NodeId, Option<&'a NodeId>>, end: &'a NodeId) -> Path {
    let mut nodes = vec![end.clone()];
    let mut current = end;

    while let Some(Some(parent)) = parents.get(current) {
        nodes.push((*parent).clone());
        current = *parent;
    }

    nodes.reverse();
    Path(nodes)
}
