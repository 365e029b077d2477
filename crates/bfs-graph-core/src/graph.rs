//! Undirected graph with insertion-ordered adjacency lists.
//!
//! The adjacency order is part of the contract: the pathfinder expands
//! neighbors in the order edges were added, which is what makes the chosen
//! shortest path deterministic.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::types::{Edge, EdgeDisplay, EdgeId, Node, NodeDisplay, NodeId};

/// Owns nodes, edges and the adjacency mapping between node identities.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph with no nodes or edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Its adjacency list starts empty.
    pub fn add_node(&mut self, node: Node) -> GraphResult<()> {
        if self.index.contains_key(&node.id) {
            return Err(GraphError::invalid_argument(format!(
                "duplicate node identity: {}",
                node.id
            )));
        }

        self.index.insert(node.id.clone(), self.nodes.len());
        self.adjacency.insert(node.id.clone(), Vec::new());
        self.nodes.push(node);
        Ok(())
    }

    /// Connect two registered nodes, updating both adjacency lists.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId) -> GraphResult<EdgeId> {
        for endpoint in [a, b] {
            if !self.contains(endpoint) {
                return Err(GraphError::invalid_argument(format!(
                    "edge {a}-{b} references unregistered node {endpoint}"
                )));
            }
        }

        if let Some(list) = self.adjacency.get_mut(a) {
            list.push(b.clone());
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.push(a.clone());
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            a: a.clone(),
            b: b.clone(),
            display: EdgeDisplay::Default,
        });

        debug!(edge = id.0, %a, %b, "edge added");
        Ok(id)
    }

    /// Ordered neighbor identities of a node.
    pub fn neighbors_of(&self, node: &NodeId) -> GraphResult<&[NodeId]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::not_found(node))
    }

    /// Set every node and edge back to its default display state.
    pub fn reset_display_state(&mut self) {
        for node in &mut self.nodes {
            node.display = NodeDisplay::Default;
        }
        for edge in &mut self.edges {
            edge.display = EdgeDisplay::Default;
        }
    }

    /// Set the display state of a single node.
    pub fn set_node_display(&mut self, id: &NodeId, display: NodeDisplay) -> GraphResult<()> {
        let idx = *self.index.get(id).ok_or_else(|| GraphError::not_found(id))?;
        self.nodes[idx].display = display;
        Ok(())
    }

    /// Set the display state of a single edge.
    pub fn set_edge_display(&mut self, id: EdgeId, display: EdgeDisplay) -> GraphResult<()> {
        let edge = self.edges.get_mut(id.0).ok_or_else(|| {
            GraphError::invalid_argument(format!("edge index {} out of range", id.0))
        })?;
        edge.display = display;
        Ok(())
    }

    /// First edge, in insertion order, joining `a` and `b` in either orientation.
    pub fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.joins(a, b))
    }

    /// Look up a node by identity.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Whether a node with this identity is registered.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Convert to a petgraph undirected graph for analysis.
    /// Returns the graph and a mapping from NodeId to NodeIndex.
    pub fn to_petgraph(&self) -> (UnGraph<NodeId, EdgeId>, HashMap<NodeId, NodeIndex>) {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut id_to_index = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let idx = graph.add_node(node.id.clone());
            id_to_index.insert(node.id.clone(), idx);
        }

        for edge in &self.edges {
            if let (Some(&a), Some(&b)) = (id_to_index.get(&edge.a), id_to_index.get(&edge.b)) {
                graph.add_edge(a, b, edge.id);
            }
        }

        (graph, id_to_index)
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        let (graph, _) = self.to_petgraph();
        petgraph::algo::connected_components(&graph)
    }
}
