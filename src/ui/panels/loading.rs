//! Skeleton rows shown while the chat list has not been loaded yet.

use eframe::egui;

use crate::ui::theme::ParleyTheme;

pub const PLACEHOLDER_ROWS: usize = 12;
pub const PLACEHOLDER_ROW_HEIGHT: f32 = 45.0;

pub fn render_loading_placeholder(ui: &mut egui::Ui, theme: &ParleyTheme) {
    // Pulse between two alphas so the placeholder reads as "loading".
    let t = ui.input(|i| i.time);
    let alpha = 0.55 + 0.25 * (t * 2.0).sin() as f32;
    let color = theme.skeleton.gamma_multiply(alpha);

    ui.vertical(|ui| {
        for _ in 0..PLACEHOLDER_ROWS {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), PLACEHOLDER_ROW_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(rect, 4.0, color);
        }
    });
    ui.ctx().request_repaint();
}
