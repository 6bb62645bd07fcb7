//! Toast overlay, one stack per screen anchor.

use eframe::egui;

use crate::notify::{Severity, ToastPosition, ToastQueue};
use crate::ui::theme::ParleyTheme;

fn anchor(position: ToastPosition) -> (egui::Align2, [f32; 2]) {
    match position {
        ToastPosition::Top => (egui::Align2::CENTER_TOP, [0.0, 12.0]),
        ToastPosition::TopLeft => (egui::Align2::LEFT_TOP, [12.0, 12.0]),
        ToastPosition::TopRight => (egui::Align2::RIGHT_TOP, [-12.0, 12.0]),
        ToastPosition::Bottom => (egui::Align2::CENTER_BOTTOM, [0.0, -12.0]),
        ToastPosition::BottomLeft => (egui::Align2::LEFT_BOTTOM, [12.0, -12.0]),
        ToastPosition::BottomRight => (egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0]),
    }
}

fn severity_color(theme: &ParleyTheme, severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Error => theme.error,
        Severity::Warning => egui::Color32::from_rgb(250, 166, 26),
        Severity::Success => egui::Color32::from_rgb(67, 181, 129),
        Severity::Info => theme.info,
    }
}

/// Draw every queued toast and handle close clicks.
pub fn render_toasts(ctx: &egui::Context, toasts: &mut ToastQueue, theme: &ParleyTheme) {
    if toasts.is_empty() {
        return;
    }

    const POSITIONS: [ToastPosition; 6] = [
        ToastPosition::Top,
        ToastPosition::TopLeft,
        ToastPosition::TopRight,
        ToastPosition::Bottom,
        ToastPosition::BottomLeft,
        ToastPosition::BottomRight,
    ];

    let mut dismissed = None;
    for position in POSITIONS {
        if !toasts.iter().any(|t| t.position == position) {
            continue;
        }
        let (align, offset) = anchor(position);
        egui::Area::new(egui::Id::new(("toast_area", position as u8)))
            .anchor(align, offset)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in toasts.iter().enumerate().filter(|(_, t)| t.position == position) {
                    egui::Frame::new()
                        .fill(severity_color(theme, toast.severity))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(&toast.title).strong().color(egui::Color32::WHITE));
                                    ui.label(egui::RichText::new(&toast.description).color(egui::Color32::WHITE));
                                });
                                if toast.dismissible && ui.small_button("✕").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                        });
                    ui.add_space(6.0);
                }
            });
    }

    if let Some(index) = dismissed {
        toasts.dismiss(index);
    }

    // Keep repainting so expired toasts disappear without user input.
    ctx.request_repaint_after(std::time::Duration::from_millis(250));
}
