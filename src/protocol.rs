//! Channel protocol between the UI thread and the backend thread.

use crate::model::{Chat, ChatId, Message};

/// Monotonic id the synchronizer attaches to each chat list fetch.
pub type RequestId = u64;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Load every chat visible to the bearer of `token`
    FetchChats { request: RequestId, token: String },
    /// Load the transcript of one chat
    FetchMessages { chat: ChatId, token: String },
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The chat list fetch tagged `request` succeeded
    ChatsLoaded { request: RequestId, chats: Vec<Chat> },
    /// The chat list fetch tagged `request` failed
    ChatsFailed { request: RequestId, reason: String },
    /// A chat transcript arrived
    MessagesLoaded { chat: ChatId, messages: Vec<Message> },
    /// A chat transcript could not be loaded
    MessagesFailed { chat: ChatId, reason: String },
    /// The backend could not start or hit an unrecoverable problem
    Error(String),
    /// The backend loop exited
    Stopped,
}
