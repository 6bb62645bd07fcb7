//! "My Chats" panel: the conversation list with selection and previews.

use eframe::egui::{self, Stroke};

use crate::labels::{latest_preview, resolve_display_label};
use crate::model::{Chat, ChatId, UserId};
use crate::state::{SelectionWriter, SessionReader};
use crate::ui::theme::ParleyTheme;

use super::loading::render_loading_placeholder;

/// Shown instead of a title the client cannot resolve.
pub(crate) const UNKNOWN_CHAT_LABEL: &str = "Unknown chat";

/// Row and header title for `chat`, falling back to [`UNKNOWN_CHAT_LABEL`].
pub(crate) fn chat_title<'a>(chat: &'a Chat, current_user: &UserId) -> &'a str {
    resolve_display_label(chat, current_user).unwrap_or(UNKNOWN_CHAT_LABEL)
}

/// Index of the selected chat in `chats`, if it is listed.
fn selected_row(chats: &[Chat], selected: Option<&ChatId>) -> Option<usize> {
    let selected = selected?;
    chats.iter().position(|c| &c.id == selected)
}

/// What the user asked for in the chat list this frame.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatListResponse {
    pub refresh_requested: bool,
}

/// Render the left chat list panel.
///
/// Clicking a row moves the selection pointer; nothing else is written.
pub fn render_chat_list(
    ctx: &egui::Context,
    session: &SessionReader,
    selection: &SelectionWriter,
    theme: &ParleyTheme,
) -> ChatListResponse {
    let mut response = ChatListResponse::default();
    let current_user = session.user().profile.id;

    egui::SidePanel::left("chat_list_panel")
        .resizable(true)
        .default_width(300.0)
        .min_width(220.0)
        .frame(
            egui::Frame::new()
                .fill(theme.surface[0])
                .inner_margin(egui::Margin::same(12))
                .stroke(Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("My Chats").color(theme.text_primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("⟳ Refresh")
                        .on_hover_text("Reload conversations (F5)")
                        .clicked()
                    {
                        response.refresh_requested = true;
                    }
                });
            });
            ui.add_space(8.0);

            egui::Frame::new()
                .fill(theme.surface[1])
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    match session.chats() {
                        Some(chats) => {
                            egui::ScrollArea::vertical()
                                .auto_shrink([false; 2])
                                .show(ui, |ui| {
                                    let selected = selected_row(&chats, session.selected_id().as_ref());
                                    for (index, chat) in chats.iter().enumerate() {
                                        let is_selected = selected == Some(index);
                                        if render_chat_item(ui, chat, &current_user, is_selected, theme) {
                                            tracing::debug!(chat = %chat.id, "chat selected");
                                            selection.select(&chat.id);
                                        }
                                        ui.add_space(6.0);
                                    }
                                });
                        }
                        None => render_loading_placeholder(ui, theme),
                    }
                });
        });

    response
}

/// One chat row: title plus the latest-message preview. Returns true when clicked.
fn render_chat_item(
    ui: &mut egui::Ui,
    chat: &Chat,
    current_user: &UserId,
    selected: bool,
    theme: &ParleyTheme,
) -> bool {
    let (fill, text_color) = if selected {
        (theme.accent, theme.on_accent)
    } else {
        (theme.surface[2], theme.text_primary)
    };

    let label = chat_title(chat, current_user);

    let inner = egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(label).size(14.0).color(text_color));
            if let Some(preview) = latest_preview(chat) {
                ui.label(egui::RichText::new(preview).size(11.0).color(text_color));
            }
        });

    let response = ui.interact(
        inner.response.rect,
        ui.id().with(("chat_item", chat.id.as_str())),
        egui::Sense::click(),
    );
    if response.hovered() && !selected {
        ui.painter().rect_stroke(
            inner.response.rect,
            8.0,
            Stroke::new(1.0, theme.surface[3]),
            egui::StrokeKind::Inside,
        );
    }
    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
