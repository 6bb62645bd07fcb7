//! Backend worker: a Tokio runtime serving `BackendAction`s.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use tokio::runtime::Runtime;

use super::api::ChatApi;
use crate::protocol::{BackendAction, GuiEvent};

/// Spawn the backend on its own thread and return the UI side of the channels.
pub fn spawn_backend(
    api: Arc<dyn ChatApi>,
) -> (Sender<BackendAction>, Receiver<GuiEvent>, JoinHandle<()>) {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();

    let handle = thread::spawn(move || {
        run_backend(api, action_rx, event_tx);
    });

    (action_tx, event_rx, handle)
}

/// Run the backend until `Shutdown` arrives or the action channel closes.
///
/// Each action runs as its own task, so a slow request never holds up the
/// next one and overlapping fetches may complete in any order.
pub fn run_backend(
    api: Arc<dyn ChatApi>,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to create Tokio runtime");
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    while let Ok(action) = action_rx.recv() {
        match action {
            BackendAction::Shutdown => break,
            other => {
                rt.spawn(handle_action(other, Arc::clone(&api), event_tx.clone()));
            }
        }
    }

    tracing::info!("backend stopped");
    let _ = event_tx.send(GuiEvent::Stopped);
}

async fn handle_action(action: BackendAction, api: Arc<dyn ChatApi>, event_tx: Sender<GuiEvent>) {
    let event = match action {
        BackendAction::FetchChats { request, token } => match api.fetch_chats(&token).await {
            Ok(chats) => {
                tracing::debug!(request, count = chats.len(), "chat list fetched");
                GuiEvent::ChatsLoaded { request, chats }
            }
            Err(e) => {
                tracing::warn!(request, error = %e, "chat list fetch failed");
                GuiEvent::ChatsFailed {
                    request,
                    reason: e.to_string(),
                }
            }
        },
        BackendAction::FetchMessages { chat, token } => {
            match api.fetch_messages(&token, &chat).await {
                Ok(messages) => {
                    tracing::debug!(%chat, count = messages.len(), "messages fetched");
                    GuiEvent::MessagesLoaded { chat, messages }
                }
                Err(e) => {
                    tracing::warn!(%chat, error = %e, "message fetch failed");
                    GuiEvent::MessagesFailed {
                        chat,
                        reason: e.to_string(),
                    }
                }
            }
        }
        BackendAction::Shutdown => return,
    };

    // The UI may already be gone during shutdown.
    let _ = event_tx.send(event);
}
