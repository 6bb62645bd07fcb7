//! Helper utilities for keeping the newest message in view.

use crate::model::{ChatId, Message, MessageId};

/// How the rendered sequence changed since the previous frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedChange {
    /// Same chat, same messages.
    Unchanged,
    /// Same chat, new messages added after the ones already shown.
    Appended,
    /// First render, chat switch, or a sequence that no longer extends the old one.
    Replaced,
}

impl FeedChange {
    /// Whether the view should jump to the newest message.
    pub fn scrolls_to_bottom(self) -> bool {
        !matches!(self, FeedChange::Unchanged)
    }
}

/// What the transcript looked like on the previous frame.
#[derive(Default, Debug)]
pub struct TranscriptView {
    chat: Option<ChatId>,
    len: usize,
    first: Option<MessageId>,
    last: Option<MessageId>,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `messages` for `chat` against the previous frame and remember them.
    pub fn observe(&mut self, chat: &ChatId, messages: &[Message]) -> FeedChange {
        let change = self.classify(chat, messages);
        self.chat = Some(chat.clone());
        self.len = messages.len();
        self.first = messages.first().map(|m| m.id.clone());
        self.last = messages.last().map(|m| m.id.clone());
        change
    }

    fn classify(&self, chat: &ChatId, messages: &[Message]) -> FeedChange {
        if self.chat.as_ref() != Some(chat) {
            return FeedChange::Replaced;
        }

        let same_prefix = self.len == 0
            || (messages.len() >= self.len
                && messages.first().map(|m| &m.id) == self.first.as_ref()
                && Some(&messages[self.len - 1].id) == self.last.as_ref());

        match (same_prefix, messages.len().cmp(&self.len)) {
            (true, std::cmp::Ordering::Equal) => FeedChange::Unchanged,
            (true, std::cmp::Ordering::Greater) => FeedChange::Appended,
            _ => FeedChange::Replaced,
        }
    }
}
