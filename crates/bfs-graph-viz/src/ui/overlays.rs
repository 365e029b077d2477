//! Overlay rendering for the instruction banner, the footer and the sidebar toggle.

/// Footer text shown under the canvas.
pub const FOOTER_TEXT: &str = "Breadth-First Search Visualization • Path shown in green";

/// Draw the current instruction (and an optional notice) in the top-left corner.
pub fn draw_instruction(ui: &mut egui::Ui, instruction: &str, notice: Option<&str>, dark_mode: bool) {
    let rect = ui.max_rect();
    let indicator_pos = egui::pos2(rect.left() + 10.0, rect.top() + 10.0);

    let text_color = if dark_mode {
        egui::Color32::from_gray(220)
    } else {
        egui::Color32::DARK_GRAY
    };

    egui::Area::new(egui::Id::new("instruction_banner"))
        .order(egui::Order::Foreground)
        .fixed_pos(indicator_pos)
        .movable(false)
        .interactable(false)
        .show(ui.ctx(), |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(capitalize(instruction))
                        .size(16.0)
                        .color(text_color),
                );
                if let Some(notice) = notice {
                    egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(200, 50, 50, 40))
                        .corner_radius(4.0)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(notice)
                                    .color(egui::Color32::from_rgb(200, 50, 50))
                                    .strong(),
                            );
                        });
                }
            });
        });
}

/// Draw the footer strip along the bottom of the window.
pub fn draw_footer(ctx: &egui::Context, dark_mode: bool) {
    let fill = if dark_mode {
        egui::Color32::from_rgb(40, 44, 52)
    } else {
        egui::Color32::from_rgb(220, 230, 240)
    };

    egui::TopBottomPanel::bottom("footer")
        .frame(egui::Frame::new().fill(fill).inner_margin(6.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(FOOTER_TEXT)
                        .italics()
                        .size(14.0)
                        .color(egui::Color32::from_rgb(70, 70, 70)),
                );
            });
        });
}

/// Draw the sidebar toggle button in the bottom-right corner.
pub fn draw_sidebar_toggle(ui: &mut egui::Ui, show_sidebar: &mut bool) {
    let g_rect = ui.max_rect();
    let btn_size = egui::vec2(32.0, 32.0);
    let right_margin = 10.0;
    let bottom_margin = 10.0;

    let toggle_pos = egui::pos2(
        g_rect.right() - right_margin - btn_size.x,
        g_rect.bottom() - bottom_margin - btn_size.y,
    );

    let (arrow, tip) = if *show_sidebar {
        ("▶", "Hide sidebar (Tab)")
    } else {
        ("◀", "Show sidebar (Tab)")
    };

    egui::Area::new(egui::Id::new("sidebar_toggle_btn"))
        .order(egui::Order::Foreground)
        .fixed_pos(toggle_pos)
        .movable(false)
        .show(ui.ctx(), |ui_area| {
            ui_area.set_clip_rect(g_rect);
            let arrow_text = egui::RichText::new(arrow).size(18.0);
            let response = ui_area.add_sized(btn_size, egui::Button::new(arrow_text));
            if response.on_hover_text(tip).clicked() {
                *show_sidebar = !*show_sidebar;
            }
        });
}

/// Upper-case the first character for display.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
