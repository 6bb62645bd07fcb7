//! Main update loop and global shortcuts

use eframe::egui;
use std::time::{Duration, Instant};

use super::ParleyApp;
use crate::ui;

impl eframe::App for ParleyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Backend events, chat list sync, transcript follow-up
        self.tick();

        let (refresh, toggle_theme, close_chat) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F5),
                i.modifiers.ctrl && i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if refresh {
            self.request_refresh();
        }
        if toggle_theme {
            self.toggle_theme(ctx);
        }
        if close_chat {
            self.selection.clear();
        }

        self.toasts.purge_expired(Instant::now());

        // Left panel: chat list
        let list = ui::render_chat_list(ctx, &self.session, &self.selection, &self.theme);
        if list.refresh_requested {
            self.request_refresh();
        }
        self.follow_selection();

        // Central panel: selected chat and its transcript
        ui::render_chat_panel(
            ctx,
            &self.session,
            &self.transcript,
            &mut self.transcript_view,
            &self.theme,
        );

        ui::render_toasts(ctx, &mut self.toasts, &self.theme);

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
