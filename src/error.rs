//! Error types for the Parley client.

use thiserror::Error;

use crate::model::ChatId;

/// Errors produced by the transport, configuration and display layers.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP request could not be completed (connect, timeout, decode).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// A conversation record violates the shape the UI relies on.
    #[error("Malformed chat '{chat_id}': {reason}")]
    MalformedChat { chat_id: ChatId, reason: String },

    /// The persisted session record is missing or unreadable.
    #[error("Session unavailable: {0}")]
    Session(String),

    /// IO error (settings and session files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Creates a MalformedChat error
    pub fn malformed_chat(chat_id: &ChatId, reason: impl Into<String>) -> Self {
        Self::MalformedChat {
            chat_id: chat_id.clone(),
            reason: reason.into(),
        }
    }

    /// Creates a Session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
