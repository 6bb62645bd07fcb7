use crate::model::{ChatId, Message};

/// Transcript of the chat currently shown in the chat panel.
///
/// A chat switch or a fresh load replaces the whole sequence; the order of
/// messages is never changed.
#[derive(Default, Clone, Debug)]
pub struct MessageBuffer {
    chat: Option<ChatId>,
    messages: Vec<Message>,
    loading: bool,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat(&self) -> Option<&ChatId> {
        self.chat.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch to `chat`, dropping the previous transcript.
    pub fn begin(&mut self, chat: ChatId) {
        self.chat = Some(chat);
        self.messages.clear();
        self.loading = true;
    }

    /// Forget the current chat.
    pub fn reset(&mut self) {
        self.chat = None;
        self.messages.clear();
        self.loading = false;
    }

    /// Install a fetched transcript. Ignored unless `chat` is still current.
    pub fn load(&mut self, chat: &ChatId, messages: Vec<Message>) -> bool {
        if self.chat.as_ref() != Some(chat) {
            return false;
        }
        self.messages = messages;
        self.loading = false;
        true
    }

    /// Stop showing the loading state for `chat` after a failed fetch.
    pub fn fail(&mut self, chat: &ChatId) {
        if self.chat.as_ref() == Some(chat) {
            self.loading = false;
        }
    }
}
