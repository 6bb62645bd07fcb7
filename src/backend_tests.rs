//! Backend tests against a scripted `ChatApi`

use async_trait::async_trait;
use crossbeam_channel::{Receiver, Sender};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::backend::{spawn_backend, ChatApi};
use crate::error::{ClientError, Result};
use crate::model::{Chat, ChatId, Message, User};
use crate::protocol::{BackendAction, GuiEvent};

/// Reply script for one `fetch_chats` call: a delay, then chats or an HTTP status.
pub(crate) type ChatReply = (Duration, std::result::Result<Vec<Chat>, u16>);

/// In-memory `ChatApi` that plays back scripted replies.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    chat_replies: Mutex<VecDeque<ChatReply>>,
    transcripts: HashMap<ChatId, Vec<Message>>,
    pub(crate) tokens: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply_chats(self, chats: Vec<Chat>) -> Self {
        self.reply_chats_after(Duration::ZERO, chats)
    }

    pub(crate) fn reply_chats_after(self, delay: Duration, chats: Vec<Chat>) -> Self {
        self.chat_replies.lock().unwrap().push_back((delay, Ok(chats)));
        self
    }

    pub(crate) fn fail_chats(self, status: u16) -> Self {
        self.chat_replies
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Err(status)));
        self
    }

    pub(crate) fn with_transcript(mut self, chat: &str, messages: Vec<Message>) -> Self {
        self.transcripts.insert(ChatId::from(chat), messages);
        self
    }
}

#[async_trait]
impl ChatApi for ScriptedApi {
    async fn fetch_chats(&self, token: &str) -> Result<Vec<Chat>> {
        self.tokens.lock().unwrap().push(token.to_string());
        let reply = self.chat_replies.lock().unwrap().pop_front();
        let (delay, outcome) = reply.unwrap_or((Duration::ZERO, Ok(Vec::new())));
        tokio::time::sleep(delay).await;
        outcome.map_err(|status| ClientError::Server {
            status,
            body: "scripted failure".into(),
        })
    }

    async fn fetch_messages(&self, token: &str, chat: &ChatId) -> Result<Vec<Message>> {
        self.tokens.lock().unwrap().push(token.to_string());
        self.transcripts
            .get(chat)
            .cloned()
            .ok_or_else(|| ClientError::Server {
                status: 404,
                body: format!("no chat {}", chat),
            })
    }
}

pub(crate) fn alice() -> User {
    User::new("u1", "Alice")
}

pub(crate) fn bob() -> User {
    User::new("u2", "Bob")
}

pub(crate) fn direct_chat(id: &str) -> Chat {
    Chat::direct(id, vec![alice(), bob()])
}

pub(crate) fn start_backend(
    api: Arc<dyn ChatApi>,
) -> (Sender<BackendAction>, Receiver<GuiEvent>, JoinHandle<()>) {
    spawn_backend(api)
}

const WAIT: Duration = Duration::from_secs(2);

    #[test]
    fn test_shutdown_stops_backend() {
        let (action_tx, event_rx, handle) = start_backend(Arc::new(ScriptedApi::new()));

        action_tx.send(BackendAction::Shutdown).unwrap();

        match event_rx.recv_timeout(WAIT) {
            Ok(GuiEvent::Stopped) => {}
            other => panic!("Expected Stopped event, got {:?}", other),
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_closed_action_channel_stops_backend() {
        let (action_tx, event_rx, handle) = start_backend(Arc::new(ScriptedApi::new()));
        drop(action_tx);

        assert!(matches!(event_rx.recv_timeout(WAIT), Ok(GuiEvent::Stopped)));
        handle.join().unwrap();
    }

    #[test]
    fn test_fetch_chats_success() {
        let api = ScriptedApi::new().reply_chats(vec![direct_chat("c1"), direct_chat("c2")]);
        let (action_tx, event_rx, _handle) = start_backend(Arc::new(api));

        action_tx
            .send(BackendAction::FetchChats {
                request: 7,
                token: "jwt".into(),
            })
            .unwrap();

        match event_rx.recv_timeout(WAIT) {
            Ok(GuiEvent::ChatsLoaded { request, chats }) => {
                assert_eq!(request, 7);
                assert_eq!(chats.len(), 2);
                assert_eq!(chats[1].id, ChatId::from("c2"));
            }
            other => panic!("Expected ChatsLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_chats_failure_reports_reason() {
        let api = ScriptedApi::new().fail_chats(500);
        let (action_tx, event_rx, _handle) = start_backend(Arc::new(api));

        action_tx
            .send(BackendAction::FetchChats {
                request: 1,
                token: "jwt".into(),
            })
            .unwrap();

        match event_rx.recv_timeout(WAIT) {
            Ok(GuiEvent::ChatsFailed { request, reason }) => {
                assert_eq!(request, 1);
                assert!(reason.contains("500"), "reason was {}", reason);
            }
            other => panic!("Expected ChatsFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_bearer_token_reaches_api() {
        let api = Arc::new(ScriptedApi::new().with_transcript("c1", Vec::new()));
        let (action_tx, event_rx, _handle) = start_backend(api.clone());

        action_tx
            .send(BackendAction::FetchMessages {
                chat: ChatId::from("c1"),
                token: "secret-token".into(),
            })
            .unwrap();
        assert!(matches!(
            event_rx.recv_timeout(WAIT),
            Ok(GuiEvent::MessagesLoaded { .. })
        ));
        assert_eq!(*api.tokens.lock().unwrap(), vec!["secret-token".to_string()]);
    }

    #[test]
    fn test_overlapping_fetches_complete_independently() {
        let api = ScriptedApi::new()
            .reply_chats_after(Duration::from_millis(300), vec![direct_chat("old")])
            .reply_chats(vec![direct_chat("new")]);
        let (action_tx, event_rx, _handle) = start_backend(Arc::new(api));

        for request in [1, 2] {
            action_tx
                .send(BackendAction::FetchChats {
                    request,
                    token: "jwt".into(),
                })
                .unwrap();
            // Let the first task take the slow reply before the second starts.
            std::thread::sleep(Duration::from_millis(50));
        }

        let order: Vec<u64> = (0..2)
            .map(|_| match event_rx.recv_timeout(WAIT) {
                Ok(GuiEvent::ChatsLoaded { request, .. }) => request,
                other => panic!("Expected ChatsLoaded, got {:?}", other),
            })
            .collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_fetch_messages_for_unknown_chat_fails() {
        let (action_tx, event_rx, _handle) = start_backend(Arc::new(ScriptedApi::new()));

        action_tx
            .send(BackendAction::FetchMessages {
                chat: ChatId::from("missing"),
                token: "jwt".into(),
            })
            .unwrap();

        match event_rx.recv_timeout(WAIT) {
            Ok(GuiEvent::MessagesFailed { chat, reason }) => {
                assert_eq!(chat, ChatId::from("missing"));
                assert!(reason.contains("404"));
            }
            other => panic!("Expected MessagesFailed, got {:?}", other),
        }
    }
