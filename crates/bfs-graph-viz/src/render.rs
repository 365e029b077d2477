//! Node/edge styling from display state, and the painter calls that draw them.

use bfs_graph_core::{EdgeDisplay, Graph, NodeDisplay};
use egui::{Align2, Color32, FontId, Painter, Stroke};

use crate::canvas::CanvasTransform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeVisuals {
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Stroke,
    pub label_color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeVisuals {
    pub stroke: Stroke,
}

pub fn canvas_background(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(24, 28, 36)
    } else {
        Color32::from_rgb(240, 248, 255)
    }
}

pub fn resolve_node_visuals(display: NodeDisplay, radius: f32, dark_mode: bool) -> NodeVisuals {
    let fill = match display {
        NodeDisplay::Default => node_base_color(dark_mode),
        NodeDisplay::Start => Color32::from_rgb(255, 215, 0),
        NodeDisplay::End => Color32::from_rgb(255, 140, 0),
        NodeDisplay::OnPath => path_color(dark_mode),
    };

    let outline = if dark_mode {
        Color32::from_gray(220)
    } else {
        Color32::BLACK
    };

    let label_color = match display {
        // Yellow and orange fills are too light for white text.
        NodeDisplay::Start | NodeDisplay::End => Color32::BLACK,
        _ => Color32::WHITE,
    };

    NodeVisuals {
        radius,
        fill,
        stroke: Stroke::new(1.5, outline),
        label_color,
    }
}

/// One legend row per node state: its label and fill.
pub fn legend_entries(dark_mode: bool) -> Vec<(&'static str, NodeVisuals)> {
    [
        NodeDisplay::Default,
        NodeDisplay::Start,
        NodeDisplay::End,
        NodeDisplay::OnPath,
    ]
    .into_iter()
    .map(|display| (display.label(), resolve_node_visuals(display, 6.0, dark_mode)))
    .collect()
}

pub fn resolve_edge_visuals(display: EdgeDisplay, dark_mode: bool) -> EdgeVisuals {
    match display {
        EdgeDisplay::Default => EdgeVisuals {
            stroke: Stroke::new(2.0, edge_base_color(dark_mode)),
        },
        EdgeDisplay::OnPath => EdgeVisuals {
            stroke: Stroke::new(3.0, path_color(dark_mode)),
        },
    }
}

/// Draw all edges, then nodes and labels on top.
pub fn paint_graph(
    painter: &Painter,
    graph: &Graph,
    transform: &CanvasTransform,
    radius: f32,
    dark_mode: bool,
    show_labels: bool,
) {
    for edge in graph.edges() {
        let (Some(a), Some(b)) = (graph.node(&edge.a), graph.node(&edge.b)) else {
            continue;
        };
        let visuals = resolve_edge_visuals(edge.display, dark_mode);
        painter.line_segment(
            [
                transform.to_screen(a.position),
                transform.to_screen(b.position),
            ],
            visuals.stroke,
        );
    }

    for node in graph.nodes() {
        let visuals = resolve_node_visuals(node.display, radius * transform.scale, dark_mode);
        let center = transform.to_screen(node.position);

        painter.circle_filled(center, visuals.radius, visuals.fill);
        painter.circle_stroke(center, visuals.radius, visuals.stroke);

        if show_labels {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                node.id.as_str(),
                FontId::proportional((16.0 * transform.scale).max(8.0)),
                visuals.label_color,
            );
        }
    }
}

fn node_base_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(70, 110, 220)
    } else {
        Color32::from_rgb(0, 0, 255)
    }
}

fn path_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(100, 255, 100)
    } else {
        Color32::from_rgb(0, 200, 0)
    }
}

fn edge_base_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_gray(160)
    } else {
        Color32::BLACK
    }
}
