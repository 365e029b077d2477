//! Core of the BFS graph visualizer: graph model, breadth-first pathfinder and
//! the selection state machine that drives highlighting.
//!
//! Nothing in this crate renders. A presentation layer reads nodes, edges and
//! the current instruction from a [`SelectionMachine`] and feeds it "node
//! selected" events, usually resolved from pointer positions with
//! [`hit_test`].
//!
//! ```
//! use bfs_graph_core::{Graph, NodeId, SelectionMachine, Topology};
//!
//! let graph = Graph::from_topology(&Topology::reference()).unwrap();
//! let mut machine = SelectionMachine::new(graph);
//! machine.select(&NodeId::new("A")).unwrap();
//! machine.select(&NodeId::new("D")).unwrap();
//! assert_eq!(machine.state().path().unwrap().to_string(), "A → B → D");
//! ```

mod error;
mod graph;
pub mod layout;
mod path;
mod selection;
pub mod topology;
mod types;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use layout::{circle_positions, hit_test, NODE_RADIUS};
pub use path::{shortest_path, Path};
pub use selection::{
    SelectionMachine, SelectionOptions, SelectionOutcome, SelectionPhase, SelectionState,
};
pub use topology::{CanvasSize, CircleLayout, EdgeSpec, NodeSpec, Topology};
pub use types::{Edge, EdgeDisplay, EdgeId, Node, NodeDisplay, NodeId, Position};
