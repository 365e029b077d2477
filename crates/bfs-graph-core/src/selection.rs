//! Interaction state machine for choosing the start and end of a search.
//!
//! ```text
//! Empty ──click N──▶ StartChosen{N} ──click M != N──▶ Resolved{N, M, path}
//!                        ▲                                   │
//!                        └────────── click any Z ────────────┘
//! ```
//!
//! Clicking the chosen start again changes nothing. Choosing an unreachable
//! end leaves the machine in `StartChosen`. The machine owns the graph, so
//! every display-state mutation goes through it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::path::{shortest_path, Path};
use crate::types::{EdgeDisplay, NodeDisplay, NodeId};

/// Current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SelectionState {
    /// Nothing chosen yet.
    #[default]
    Empty,
    /// A start node is chosen and marked.
    StartChosen { start: NodeId },
    /// Both endpoints are chosen and the path between them is marked.
    Resolved {
        start: NodeId,
        end: NodeId,
        path: Path,
    },
}

/// Discriminant of [`SelectionState`] without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    Empty,
    StartChosen,
    Resolved,
}

impl SelectionState {
    pub fn phase(&self) -> SelectionPhase {
        match self {
            SelectionState::Empty => SelectionPhase::Empty,
            SelectionState::StartChosen { .. } => SelectionPhase::StartChosen,
            SelectionState::Resolved { .. } => SelectionPhase::Resolved,
        }
    }

    pub fn start(&self) -> Option<&NodeId> {
        match self {
            SelectionState::Empty => None,
            SelectionState::StartChosen { start } | SelectionState::Resolved { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn end(&self) -> Option<&NodeId> {
        match self {
            SelectionState::Resolved { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SelectionState::Resolved { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Instruction shown to the user for this state.
    pub fn instruction(&self) -> &'static str {
        match self.phase() {
            SelectionPhase::Empty => "choose a start point",
            SelectionPhase::StartChosen => "choose an end point",
            SelectionPhase::Resolved => "choose a node to start over",
        }
    }
}

/// What a single selection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// First click: the node became the start.
    StartChosen { start: NodeId },
    /// Second click: a path was found and marked.
    Resolved {
        start: NodeId,
        end: NodeId,
        path: Path,
    },
    /// Second click on an unreachable node; the start stays chosen.
    NoPath { start: NodeId, end: NodeId },
    /// Click after a resolved search: marks were cleared and the node became the new start.
    Restarted { start: NodeId },
    /// Click on the already chosen start; nothing changed.
    Unchanged,
}

/// Options for how the machine marks the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    /// Keep the endpoints marked as start/end instead of on-path once a path is found.
    pub highlight_endpoints: bool,
}

/// Owns the graph and the selection state, and applies transitions.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    graph: Graph,
    state: SelectionState,
    options: SelectionOptions,
}

impl SelectionMachine {
    pub fn new(graph: Graph) -> Self {
        Self::with_options(graph, SelectionOptions::default())
    }

    pub fn with_options(graph: Graph, options: SelectionOptions) -> Self {
        Self {
            graph,
            state: SelectionState::Empty,
            options,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn options(&self) -> SelectionOptions {
        self.options
    }

    /// Change the marking options. Takes effect on the next resolved search.
    pub fn set_options(&mut self, options: SelectionOptions) {
        self.options = options;
    }

    pub fn instruction(&self) -> &'static str {
        self.state.instruction()
    }

    /// Process one "node selected" event to completion.
    pub fn select(&mut self, node: &NodeId) -> GraphResult<SelectionOutcome> {
        if !self.graph.contains(node) {
            return Err(GraphError::not_found(node));
        }

        let (next, outcome) = match &self.state {
            SelectionState::Empty => {
                self.mark_start(node)?;
                (
                    SelectionState::StartChosen {
                        start: node.clone(),
                    },
                    SelectionOutcome::StartChosen {
                        start: node.clone(),
                    },
                )
            }
            SelectionState::StartChosen { start } if start == node => {
                debug!(node = %node, "start re-selected, ignoring");
                return Ok(SelectionOutcome::Unchanged);
            }
            SelectionState::StartChosen { start } => {
                let start = start.clone();
                self.resolve(start, node.clone())?
            }
            SelectionState::Resolved { .. } => {
                self.graph.reset_display_state();
                self.mark_start(node)?;
                (
                    SelectionState::StartChosen {
                        start: node.clone(),
                    },
                    SelectionOutcome::Restarted {
                        start: node.clone(),
                    },
                )
            }
        };

        debug!(node = %node, phase = ?next.phase(), "selection processed");
        self.state = next;
        Ok(outcome)
    }

    /// Clear the selection and all marks.
    pub fn reset(&mut self) {
        self.graph.reset_display_state();
        self.state = SelectionState::Empty;
        info!("selection reset");
    }

    fn mark_start(&mut self, node: &NodeId) -> GraphResult<()> {
        self.graph.set_node_display(node, NodeDisplay::Start)
    }

    fn resolve(
        &mut self,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<(SelectionState, SelectionOutcome)> {
        self.graph.reset_display_state();

        let path = match shortest_path(&self.graph, &start, &end) {
            Ok(path) => path,
            Err(err) if err.is_recoverable() => {
                warn!(%start, %end, error = %err, "no path exists");
                self.mark_start(&start)?;
                return Ok((
                    SelectionState::StartChosen {
                        start: start.clone(),
                    },
                    SelectionOutcome::NoPath { start, end },
                ));
            }
            Err(err) => return Err(err),
        };

        self.mark_path(&path)?;
        info!(%start, %end, hops = path.hops(), "path resolved");

        Ok((
            SelectionState::Resolved {
                start: start.clone(),
                end: end.clone(),
                path: path.clone(),
            },
            SelectionOutcome::Resolved { start, end, path },
        ))
    }

    fn mark_path(&mut self, path: &Path) -> GraphResult<()> {
        for node in path.nodes() {
            self.graph.set_node_display(node, NodeDisplay::OnPath)?;
        }

        for (a, b) in path.steps() {
            if let Some(edge) = self.graph.edge_between(a, b).map(|edge| edge.id) {
                self.graph.set_edge_display(edge, EdgeDisplay::OnPath)?;
            }
        }

        if self.options.highlight_endpoints {
            self.graph.set_node_display(path.start(), NodeDisplay::Start)?;
            self.graph.set_node_display(path.end(), NodeDisplay::End)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;

    fn id(label: &str) -> NodeId {
        NodeId::new(label)
    }

    fn machine() -> SelectionMachine {
        SelectionMachine::new(Graph::from_topology(&Topology::reference()).unwrap())
    }

    fn display(m: &SelectionMachine, label: &str) -> NodeDisplay {
        m.graph().node(&id(label)).unwrap().display
    }

    fn on_path_edges(m: &SelectionMachine) -> Vec<(String, String)> {
        m.graph()
            .edges()
            .iter()
            .filter(|e| e.display == EdgeDisplay::OnPath)
            .map(|e| (e.a.to_string(), e.b.to_string()))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let m = machine();
        assert_eq!(m.state(), &SelectionState::Empty);
        assert_eq!(m.instruction(), "choose a start point");
    }

    #[test]
    fn test_first_click_marks_start() {
        let mut m = machine();
        let outcome = m.select(&id("A")).unwrap();
        assert_eq!(outcome, SelectionOutcome::StartChosen { start: id("A") });
        assert_eq!(m.state().phase(), SelectionPhase::StartChosen);
        assert_eq!(m.state().start(), Some(&id("A")));
        assert_eq!(display(&m, "A"), NodeDisplay::Start);
        assert_eq!(m.instruction(), "choose an end point");
    }

    #[test]
    fn test_second_click_resolves_path() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        let outcome = m.select(&id("D")).unwrap();

        let path = m.state().path().unwrap().clone();
        assert_eq!(path.nodes(), &[id("A"), id("B"), id("D")]);
        assert_eq!(
            outcome,
            SelectionOutcome::Resolved {
                start: id("A"),
                end: id("D"),
                path
            }
        );
        assert_eq!(m.state().end(), Some(&id("D")));
        assert_eq!(m.instruction(), "choose a node to start over");

        for label in ["A", "B", "D"] {
            assert_eq!(display(&m, label), NodeDisplay::OnPath);
        }
        assert_eq!(display(&m, "C"), NodeDisplay::Default);
        assert_eq!(
            on_path_edges(&m),
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "D".to_string())
            ]
        );
    }

    #[test]
    fn test_reclicking_start_is_noop() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        let before = m.graph().clone();

        let outcome = m.select(&id("A")).unwrap();
        assert_eq!(outcome, SelectionOutcome::Unchanged);
        assert_eq!(m.state(), &SelectionState::StartChosen { start: id("A") });
        assert_eq!(m.graph().nodes(), before.nodes());
        assert_eq!(m.graph().edges(), before.edges());
    }

    #[test]
    fn test_third_click_restarts() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        m.select(&id("D")).unwrap();
        let outcome = m.select(&id("C")).unwrap();

        assert_eq!(outcome, SelectionOutcome::Restarted { start: id("C") });
        assert_eq!(m.state(), &SelectionState::StartChosen { start: id("C") });
        assert_eq!(display(&m, "C"), NodeDisplay::Start);
        assert_eq!(display(&m, "B"), NodeDisplay::Default);
        assert!(on_path_edges(&m).is_empty());
    }

    #[test]
    fn test_clicking_resolved_start_restarts_with_it() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        m.select(&id("D")).unwrap();
        let outcome = m.select(&id("A")).unwrap();
        assert_eq!(outcome, SelectionOutcome::Restarted { start: id("A") });
        assert_eq!(display(&m, "A"), NodeDisplay::Start);
        assert_eq!(display(&m, "D"), NodeDisplay::Default);
    }

    #[test]
    fn test_unreachable_end_keeps_start() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        let outcome = m.select(&id("I")).unwrap();

        assert_eq!(
            outcome,
            SelectionOutcome::NoPath {
                start: id("A"),
                end: id("I")
            }
        );
        assert_eq!(m.state(), &SelectionState::StartChosen { start: id("A") });
        assert_eq!(display(&m, "A"), NodeDisplay::Start);
        assert_eq!(display(&m, "I"), NodeDisplay::Default);

        // A reachable node still resolves afterwards.
        m.select(&id("C")).unwrap();
        assert_eq!(m.state().phase(), SelectionPhase::Resolved);
    }

    #[test]
    fn test_unknown_node_is_rejected_without_change() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        let err = m.select(&id("Z")).unwrap_err();
        assert!(matches!(err, GraphError::NotFound { .. }));
        assert_eq!(m.state(), &SelectionState::StartChosen { start: id("A") });
    }

    #[test]
    fn test_highlight_endpoints_option() {
        let graph = Graph::from_topology(&Topology::reference()).unwrap();
        let mut m = SelectionMachine::with_options(
            graph,
            SelectionOptions {
                highlight_endpoints: true,
            },
        );
        m.select(&id("A")).unwrap();
        m.select(&id("D")).unwrap();
        assert_eq!(display(&m, "A"), NodeDisplay::Start);
        assert_eq!(display(&m, "B"), NodeDisplay::OnPath);
        assert_eq!(display(&m, "D"), NodeDisplay::End);
    }

    #[test]
    fn test_reset() {
        let mut m = machine();
        m.select(&id("A")).unwrap();
        m.select(&id("D")).unwrap();
        m.reset();
        assert_eq!(m.state(), &SelectionState::Empty);
        assert!(m
            .graph()
            .nodes()
            .iter()
            .all(|n| n.display == NodeDisplay::Default));
        assert!(on_path_edges(&m).is_empty());
    }

    #[test]
    fn test_state_serializes_with_phase_tag() {
        let state = SelectionState::StartChosen { start: id("A") };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "start_chosen", "start": "A"}));
    }

    #[test]
    fn test_resolved_state_with_empty_path_is_rejected() {
        let json = r#"{"phase":"resolved","start":"A","end":"D","path":[]}"#;
        assert!(serde_json::from_str::<SelectionState>(json).is_err());

        let json = r#"{"phase":"resolved","start":"A","end":"D","path":["A","B","D"]}"#;
        let state: SelectionState = serde_json::from_str(json).unwrap();
        assert_eq!(state.path().map(Path::hops), Some(2));
    }
}
