//! Node placement and pointer hit testing.

use std::f32::consts::TAU;

use crate::graph::Graph;
use crate::types::{NodeId, Position};

/// Default radius of a node, in canvas units.
pub const NODE_RADIUS: f32 = 25.0;

/// Evenly spaced positions on a circle, starting at angle zero and going
/// clockwise in screen coordinates (y grows downwards).
pub fn circle_positions(count: usize, center: Position, radius: f32) -> Vec<Position> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            Position::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Find the node under `point`, testing nodes in insertion order.
pub fn hit_test(graph: &Graph, point: Position, radius: f32) -> Option<&NodeId> {
    graph
        .nodes()
        .iter()
        .find(|node| node.contains(point, radius))
        .map(|node| &node.id)
}
