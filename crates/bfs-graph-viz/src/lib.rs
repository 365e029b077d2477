//! egui visualization for breadth-first shortest paths.
//!
//! The app draws the graph held by a [`SelectionMachine`], turns clicks into
//! node selections through the core hit test, and repaints from the updated
//! display state in the same frame.

mod app;
mod canvas;
mod render;
mod settings;
mod ui;

pub use app::PathfinderApp;
pub use canvas::CanvasTransform;
pub use settings::SettingsStyle;
pub use ui::FOOTER_TEXT;

use bfs_graph_core::{CanvasSize, SelectionMachine};
use eframe::NativeOptions;

/// Title of the native window.
pub const WINDOW_TITLE: &str = "BFS Pathfinding Visualizer";

/// Width reserved for the sidebar next to the canvas.
const SIDEBAR_WIDTH: f32 = 260.0;

/// Open a native window and block until it is closed.
pub fn run_native(
    machine: SelectionMachine,
    canvas: CanvasSize,
    settings_style: SettingsStyle,
) -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.width + SIDEBAR_WIDTH, canvas.height + 40.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    tracing::info!("launching native window");

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(PathfinderApp::new(
                cc,
                machine,
                canvas,
                settings_style,
            )))
        }),
    )
}
