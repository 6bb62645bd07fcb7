//! Transcript rendering with sender runs and avatars.

use chrono::Local;
use eframe::egui::{self, Align, Layout};

use crate::grouping::{layout_rows, RowLayout, Side, AVATAR_GUTTER};
use crate::model::{ChatId, Message, UserId};
use crate::ui::theme::{self, ParleyTheme};

use super::helpers::TranscriptView;

const AVATAR_SPACING: f32 = 4.0;
const AVATAR_SIZE: f32 = AVATAR_GUTTER - AVATAR_SPACING;
/// Bubbles never grow wider than this share of the panel.
const BUBBLE_MAX_WIDTH: f32 = 0.75;

/// Render the transcript of `chat`, keeping the newest message in view.
///
/// The scroll offset is stored per chat, so switching chats starts from a
/// fresh area that is then moved to the bottom.
pub fn render_transcript(
    ui: &mut egui::Ui,
    view: &mut TranscriptView,
    chat: &ChatId,
    messages: &[Message],
    current_user: &UserId,
    theme: &ParleyTheme,
) {
    let change = view.observe(chat, messages);
    let rows = layout_rows(messages, current_user);

    egui::ScrollArea::vertical()
        .id_salt(("transcript", chat.as_str()))
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let bubble_width = ui.available_width() * BUBBLE_MAX_WIDTH;

            for (message, row) in messages.iter().zip(&rows) {
                render_row(ui, message, row, bubble_width, theme);
            }

            if change.scrolls_to_bottom() {
                ui.scroll_to_cursor(Some(Align::BOTTOM));
            }
        });
}

fn render_row(
    ui: &mut egui::Ui,
    message: &Message,
    row: &RowLayout,
    bubble_width: f32,
    theme: &ParleyTheme,
) {
    ui.add_space(row.top_spacing());

    match row.side {
        Side::Outgoing => {
            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                render_bubble(ui, message, theme.bubble_own, bubble_width, theme);
            });
        }
        Side::Incoming => {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                if row.show_avatar {
                    theme::render_avatar(ui, &message.sender, AVATAR_SIZE)
                        .on_hover_text(&message.sender.name);
                    ui.add_space(AVATAR_SPACING);
                } else {
                    ui.add_space(row.left_margin.points());
                }
                render_bubble(ui, message, theme.bubble_other, bubble_width, theme);
            });
        }
    }
}

fn render_bubble(
    ui: &mut egui::Ui,
    message: &Message,
    fill: egui::Color32,
    max_width: f32,
    theme: &ParleyTheme,
) {
    let response = egui::Frame::new()
        .fill(fill)
        .corner_radius(20.0)
        .inner_margin(egui::Margin::symmetric(15, 5))
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.add(
                egui::Label::new(egui::RichText::new(&message.content).color(theme.bubble_text))
                    .wrap(),
            );
        })
        .response;

    if let Some(sent) = message.created_at {
        response.on_hover_text(sent.with_timezone(&Local).format("%b %e, %H:%M").to_string());
    }
}
