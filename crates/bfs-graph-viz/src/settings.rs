//! Settings structures for the visualization UI.

use bfs_graph_core::NODE_RADIUS;

/// Visual style toggles.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Dark canvas and panel visuals.
    pub dark_mode: bool,
    /// Node radius in canvas units. Also the click target radius.
    pub node_radius: f32,
    /// Draw node labels.
    pub show_labels: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            dark_mode: false,
            node_radius: NODE_RADIUS,
            show_labels: true,
        }
    }
}

impl SettingsStyle {
    /// Smallest and largest radius the sidebar slider allows.
    pub const RADIUS_RANGE: std::ops::RangeInclusive<f32> = 10.0..=40.0;

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius.clamp(*Self::RADIUS_RANGE.start(), *Self::RADIUS_RANGE.end());
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }
}
