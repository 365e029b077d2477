//! Main application state and rendering logic.

use eframe::{App, CreationContext};
use egui::{CollapsingHeader, Context, Sense};
use tracing::{error, info};

use bfs_graph_core::{
    hit_test, CanvasSize, Position, SelectionMachine, SelectionOutcome, SelectionPhase,
};

use crate::canvas::CanvasTransform;
use crate::render::{canvas_background, legend_entries, paint_graph};
use crate::settings::SettingsStyle;
use crate::ui::{draw_footer, draw_instruction, draw_sidebar_toggle};

/// The pathfinding visualization application.
pub struct PathfinderApp {
    /// Graph plus selection state; every click goes through it
    machine: SelectionMachine,
    /// Logical drawing area of the topology
    canvas: CanvasSize,
    /// Style settings
    settings_style: SettingsStyle,
    /// Whether to show the sidebar
    show_sidebar: bool,
    /// Message from the last selection that needs the user's attention
    notice: Option<String>,
    /// Connected components, cached at construction
    component_count: usize,
}

impl PathfinderApp {
    /// Create the app and apply the initial visuals.
    pub fn new(
        cc: &CreationContext<'_>,
        machine: SelectionMachine,
        canvas: CanvasSize,
        settings_style: SettingsStyle,
    ) -> Self {
        let visuals = if settings_style.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        Self::from_parts(machine, canvas, settings_style)
    }

    /// Create the app without touching an egui context.
    pub fn from_parts(
        machine: SelectionMachine,
        canvas: CanvasSize,
        settings_style: SettingsStyle,
    ) -> Self {
        let component_count = machine.graph().component_count();
        info!(
            nodes = machine.graph().node_count(),
            edges = machine.graph().edge_count(),
            components = component_count,
            "pathfinder app ready"
        );

        Self {
            machine,
            canvas,
            settings_style,
            show_sidebar: true,
            notice: None,
            component_count,
        }
    }

    pub fn machine(&self) -> &SelectionMachine {
        &self.machine
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handle a click at a canvas position. Returns `None` when no node was hit.
    pub fn select_at(&mut self, point: Position) -> Option<SelectionOutcome> {
        let node = hit_test(self.machine.graph(), point, self.settings_style.node_radius)?.clone();

        match self.machine.select(&node) {
            Ok(outcome) => {
                self.apply_outcome(&outcome);
                Some(outcome)
            }
            Err(err) => {
                error!(%node, error = %err, "selection failed");
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    /// Clear the selection and any notice.
    pub fn reset_selection(&mut self) {
        self.machine.reset();
        self.notice = None;
    }

    fn apply_outcome(&mut self, outcome: &SelectionOutcome) {
        match outcome {
            SelectionOutcome::NoPath { start, end } => {
                self.notice = Some(format!("no path exists between {start} and {end}"));
            }
            SelectionOutcome::Unchanged => {}
            _ => self.notice = None,
        }
    }
}

// =============================================================================
// Sidebar Panel UI
// =============================================================================

impl PathfinderApp {
    fn info_icon(ui: &mut egui::Ui, tip: &str) {
        ui.add_space(4.0);
        ui.small_button("ℹ").on_hover_text(tip);
    }

    fn ui_info(&self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Graph Info")
            .default_open(true)
            .show(ui, |ui| {
                let graph = self.machine.graph();
                ui.label(format!("Nodes: {}", graph.node_count()));
                ui.label(format!("Edges: {}", graph.edge_count()));
                ui.label(format!("Components: {}", self.component_count));

                ui.separator();
                for (label, visuals) in legend_entries(self.settings_style.dark_mode) {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                        ui.painter()
                            .circle(rect.center(), visuals.radius, visuals.fill, visuals.stroke);
                        ui.label(label);
                    });
                }
            });
    }

    fn ui_selection(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Selection")
            .default_open(true)
            .show(ui, |ui| {
                let state = self.machine.state();
                let phase = match state.phase() {
                    SelectionPhase::Empty => "empty",
                    SelectionPhase::StartChosen => "start chosen",
                    SelectionPhase::Resolved => "resolved",
                };
                ui.label(format!("Phase: {phase}"));
                ui.label(format!(
                    "Start: {}",
                    state.start().map(|s| s.as_str()).unwrap_or("-")
                ));
                ui.label(format!(
                    "End: {}",
                    state.end().map(|s| s.as_str()).unwrap_or("-")
                ));

                if let Some(path) = state.path() {
                    ui.separator();
                    ui.label(egui::RichText::new(path.to_string()).strong());
                    ui.label(format!("Hops: {}", path.hops()));
                }

                ui.separator();
                let can_reset = state.phase() != SelectionPhase::Empty;
                if ui
                    .add_enabled(can_reset, egui::Button::new("Reset"))
                    .on_hover_text("Clear the selection (Esc)")
                    .clicked()
                {
                    self.reset_selection();
                }
            });
    }

    fn ui_style(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Style").show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut dark = ui.ctx().style().visuals.dark_mode;
                if ui.checkbox(&mut dark, "dark mode").changed() {
                    if dark {
                        ui.ctx().set_visuals(egui::Visuals::dark());
                    } else {
                        ui.ctx().set_visuals(egui::Visuals::light());
                    }
                    self.settings_style.dark_mode = dark;
                }
            });

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.settings_style.show_labels, "labels");
            });

            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(
                        &mut self.settings_style.node_radius,
                        SettingsStyle::RADIUS_RANGE,
                    )
                    .text("node radius"),
                );
                Self::info_icon(ui, "Also the click target size");
            });

            ui.horizontal(|ui| {
                let mut options = self.machine.options();
                if ui
                    .checkbox(&mut options.highlight_endpoints, "highlight endpoints")
                    .changed()
                {
                    self.machine.set_options(options);
                }
                Self::info_icon(ui, "Keep start and end colored differently from the path");
            });
        });
    }
}

// =============================================================================
// eframe App
// =============================================================================

impl App for PathfinderApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Tab) {
                self.show_sidebar = !self.show_sidebar;
            }
        });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.reset_selection();
        }

        draw_footer(ctx, self.settings_style.dark_mode);

        if self.show_sidebar {
            egui::SidePanel::right("right_panel")
                .default_width(260.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.heading("BFS Pathfinder");
                        ui.separator();

                        self.ui_info(ui);
                        ui.separator();

                        self.ui_selection(ui);
                        ui.separator();

                        self.ui_style(ui);
                    });
                });
        }

        let dark_mode = self.settings_style.dark_mode;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(canvas_background(dark_mode)))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
                let transform = CanvasTransform::fit(response.rect, self.canvas);

                // The click is fully processed before this frame paints.
                if response.clicked() {
                    if let Some(pointer) = response.interact_pointer_pos() {
                        self.select_at(transform.to_canvas(pointer));
                    }
                }

                paint_graph(
                    &painter,
                    self.machine.graph(),
                    &transform,
                    self.settings_style.node_radius,
                    dark_mode,
                    self.settings_style.show_labels,
                );

                draw_instruction(ui, self.machine.instruction(), self.notice(), dark_mode);
                draw_sidebar_toggle(ui, &mut self.show_sidebar);
            });
    }
}
