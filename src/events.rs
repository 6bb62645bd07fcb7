//! Backend event processing (chat list results, transcripts, backend errors).

use crate::buffer::MessageBuffer;
use crate::notify::{Notifier, Toast};
use crate::protocol::GuiEvent;
use crate::sync::{ChatListSynchronizer, FetchOutcome};

/// Route one backend event to the component that owns its data.
pub fn process_single_event(
    event: GuiEvent,
    sync: &mut ChatListSynchronizer,
    transcript: &mut MessageBuffer,
    notifier: &mut dyn Notifier,
) {
    match event {
        GuiEvent::ChatsLoaded { request, chats } => {
            sync.apply(request, FetchOutcome::Loaded(chats), notifier);
        }
        GuiEvent::ChatsFailed { request, reason } => {
            sync.apply(request, FetchOutcome::Failed(reason), notifier);
        }
        GuiEvent::MessagesLoaded { chat, messages } => {
            let count = messages.len();
            if !transcript.load(&chat, messages) {
                tracing::debug!(%chat, count, "ignoring transcript for a chat no longer shown");
            }
        }
        GuiEvent::MessagesFailed { chat, reason } => {
            if transcript.chat() == Some(&chat) {
                tracing::warn!(%chat, %reason, "failed to load messages");
                transcript.fail(&chat);
                notifier.notify(Toast::messages_failed());
            }
        }
        GuiEvent::Error(reason) => {
            tracing::error!(%reason, "backend error");
            notifier.notify(Toast::backend_error(reason));
        }
        GuiEvent::Stopped => {
            tracing::info!("backend reported shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    use crate::model::{AuthUser, ChatId, Message, User};
    use crate::state::SessionContext;
    use crate::sync::FetchTrigger;

    fn sync() -> ChatListSynchronizer {
        let handles = SessionContext::new(AuthUser {
            profile: User::new("u1", "Alice"),
            token: "jwt".into(),
        });
        let (tx, _rx) = unbounded();
        ChatListSynchronizer::new(handles.reader, handles.chats, FetchTrigger::new().subscribe(), tx)
    }

    #[test]
    fn test_message_failure_for_shown_chat_notifies() {
        let mut sync = sync();
        let mut transcript = MessageBuffer::new();
        transcript.begin(ChatId::from("c1"));
        let mut toasts = Vec::new();

        process_single_event(
            GuiEvent::MessagesFailed {
                chat: ChatId::from("c1"),
                reason: "boom".into(),
            },
            &mut sync,
            &mut transcript,
            &mut toasts,
        );
        assert_eq!(toasts, vec![Toast::messages_failed()]);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn test_message_failure_for_other_chat_is_silent() {
        let mut sync = sync();
        let mut transcript = MessageBuffer::new();
        transcript.begin(ChatId::from("c2"));
        let mut toasts = Vec::new();

        process_single_event(
            GuiEvent::MessagesFailed {
                chat: ChatId::from("c1"),
                reason: "boom".into(),
            },
            &mut sync,
            &mut transcript,
            &mut toasts,
        );
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_messages_loaded_fill_transcript() {
        let mut sync = sync();
        let mut transcript = MessageBuffer::new();
        transcript.begin(ChatId::from("c1"));
        let mut toasts = Vec::new();

        process_single_event(
            GuiEvent::MessagesLoaded {
                chat: ChatId::from("c1"),
                messages: vec![Message::new("m1", User::new("u2", "Bob"), "hi")],
            },
            &mut sync,
            &mut transcript,
            &mut toasts,
        );
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_backend_error_becomes_toast() {
        let mut sync = sync();
        let mut transcript = MessageBuffer::new();
        let mut toasts = Vec::new();
        process_single_event(GuiEvent::Error("no runtime".into()), &mut sync, &mut transcript, &mut toasts);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, "no runtime");
    }
}
