//! Central panel: the selected chat's header and transcript.

use eframe::egui;

use crate::buffer::MessageBuffer;
use crate::state::SessionReader;
use crate::ui::messages::{render_transcript, TranscriptView};
use crate::ui::theme::ParleyTheme;

use super::chat_list::chat_title;

pub fn render_chat_panel(
    ctx: &egui::Context,
    session: &SessionReader,
    transcript: &MessageBuffer,
    view: &mut TranscriptView,
    theme: &ParleyTheme,
) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme.surface[0])
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            let Some(chat) = session.selected_chat() else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Click on a user to start chatting")
                            .size(26.0)
                            .color(theme.text_muted),
                    );
                });
                return;
            };

            let user = session.user();
            let title = chat_title(&chat, user.id());

            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(title).color(theme.text_primary));
                if chat.is_group {
                    ui.label(
                        egui::RichText::new(format!("{} members", chat.users.len()))
                            .small()
                            .color(theme.text_muted),
                    );
                }
            });
            ui.add_space(8.0);

            egui::Frame::new()
                .fill(theme.surface[1])
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    if transcript.is_loading() && transcript.messages().is_empty() {
                        ui.centered_and_justified(|ui| {
                            ui.spinner();
                        });
                    } else {
                        render_transcript(ui, view, &chat.id, transcript.messages(), user.id(), theme);
                    }
                });
        });
}
