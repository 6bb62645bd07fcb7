//! Core ParleyApp struct definition and initialization

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use std::sync::Arc;

use crate::backend::{spawn_backend, ChatApi};
use crate::buffer::MessageBuffer;
use crate::config::{save_settings, Settings};
use crate::model::AuthUser;
use crate::notify::{Notifier, Toast, ToastQueue};
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::{SelectionWriter, SessionContext, SessionReader};
use crate::sync::{ChatListSynchronizer, FetchTrigger};
use crate::ui::{self, ParleyTheme, TranscriptView};

pub struct ParleyApp {
    // Session: readers for every panel, the selection writer for the chat list
    pub session: SessionReader,
    pub selection: SelectionWriter,

    // Chat list synchronization (owns the chat list writer)
    pub sync: ChatListSynchronizer,
    pub fetch_trigger: FetchTrigger,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Selected chat transcript and its scroll tracking
    pub transcript: MessageBuffer,
    pub transcript_view: TranscriptView,

    pub toasts: ToastQueue,

    pub settings: Settings,
    pub theme: ParleyTheme,
    persist_on_exit: bool,
}

impl ParleyApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        user: AuthUser,
        api: Arc<dyn ChatApi>,
    ) -> Self {
        // Spawn the backend thread
        let (action_tx, event_rx, _handle) = spawn_backend(api);

        let mut app = Self::with_channels(settings, user, action_tx, event_rx);
        app.persist_on_exit = true;
        // Profile pictures are fetched over HTTP and decoded by the image loaders.
        egui_extras::install_image_loaders(&cc.egui_ctx);
        ui::apply_app_style(&cc.egui_ctx, &app.theme);
        app
    }

    /// Build the app around existing backend channels, without a window.
    pub fn with_channels(
        settings: Settings,
        user: AuthUser,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
    ) -> Self {
        tracing::info!(user = %user.id(), api = %settings.api_base_url, "starting session");

        let handles = SessionContext::new(user);
        let fetch_trigger = FetchTrigger::new();
        let sync = ChatListSynchronizer::new(
            handles.reader.clone(),
            handles.chats,
            fetch_trigger.subscribe(),
            action_tx.clone(),
        );
        let theme = ParleyTheme::named(&settings.theme);

        Self {
            session: handles.reader,
            selection: handles.selection,
            sync,
            fetch_trigger,
            action_tx,
            event_rx,
            transcript: MessageBuffer::new(),
            transcript_view: TranscriptView::new(),
            toasts: ToastQueue::new(),
            settings,
            theme,
            persist_on_exit: false,
        }
    }

    /// Per-frame state upkeep that does not draw anything.
    pub fn tick(&mut self) {
        self.process_events();
        self.sync.poll(&mut self.toasts);
        self.follow_selection();
    }

    /// Mark the chat list stale and reload the open transcript.
    pub fn request_refresh(&mut self) {
        self.fetch_trigger.bump();
        if let Some(chat) = self.transcript.chat().cloned() {
            self.send_or_notify(BackendAction::FetchMessages {
                chat,
                token: self.session.token(),
            });
        }
    }

    /// Load the transcript when the resolved selection changes.
    pub(super) fn follow_selection(&mut self) {
        let selected = self.session.selected_chat().map(|c| c.id);
        if selected.as_ref() == self.transcript.chat() {
            return;
        }

        // A new mount, even of the same chat, starts scrolled to the newest message.
        self.transcript_view = TranscriptView::new();
        match selected {
            Some(chat) => {
                tracing::debug!(%chat, "loading transcript");
                self.transcript.begin(chat.clone());
                self.send_or_notify(BackendAction::FetchMessages {
                    chat,
                    token: self.session.token(),
                });
            }
            None => self.transcript.reset(),
        }
    }

    fn send_or_notify(&mut self, action: BackendAction) {
        if let Err(e) = self.action_tx.send(action) {
            tracing::error!("backend is gone: {}", e);
            if let BackendAction::FetchMessages { chat, .. } = e.into_inner() {
                self.transcript.fail(&chat);
            }
            self.toasts.notify(Toast::messages_failed());
        }
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = if self.settings.theme == "light" { "dark" } else { "light" }.to_string();
        self.theme = ParleyTheme::named(&self.settings.theme);
        ui::apply_app_style(ctx, &self.theme);
    }
}

impl Drop for ParleyApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
        // Persist settings on exit
        if self.persist_on_exit {
            if let Err(e) = save_settings(&self.settings) {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }
    }
}
