//! Chat list labels: conversation titles and latest-message previews.

use std::borrow::Cow;

use crate::error::{ClientError, Result};
use crate::model::{Chat, UserId};

/// Previews longer than this many characters are truncated.
pub const PREVIEW_LIMIT: usize = 50;
/// Characters kept from a truncated preview.
const PREVIEW_KEEP: usize = PREVIEW_LIMIT + 1;
const ELLIPSIS: &str = "...";

/// Title of a conversation as seen by `current_user`.
///
/// Group chats use their stored name. Two-party chats use the name of the
/// member who is not `current_user`; any other membership shape is reported as
/// [`ClientError::MalformedChat`].
pub fn resolve_display_label<'a>(chat: &'a Chat, current_user: &UserId) -> Result<&'a str> {
    if chat.is_group {
        return chat
            .name
            .as_deref()
            .ok_or_else(|| ClientError::malformed_chat(&chat.id, "group chat has no name"));
    }

    if chat.users.len() != 2 {
        return Err(ClientError::malformed_chat(
            &chat.id,
            format!("expected 2 members, found {}", chat.users.len()),
        ));
    }

    let mut others = chat.users.iter().filter(|u| &u.id != current_user);
    match (others.next(), others.next()) {
        (Some(other), None) => Ok(other.name.as_str()),
        (None, _) => Err(ClientError::malformed_chat(&chat.id, "both members are the current user")),
        (Some(_), Some(_)) => Err(ClientError::malformed_chat(&chat.id, "current user is not a member")),
    }
}

/// Shorten message content for the chat list.
///
/// Content over [`PREVIEW_LIMIT`] characters keeps its first 51 characters and
/// gains a `...` suffix; shorter content is returned as is.
pub fn preview_content(content: &str) -> Cow<'_, str> {
    if content.chars().count() <= PREVIEW_LIMIT {
        return Cow::Borrowed(content);
    }
    let cut = content
        .char_indices()
        .nth(PREVIEW_KEEP)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());
    Cow::Owned(format!("{}{}", &content[..cut], ELLIPSIS))
}

/// Second line of a chat list row: `"<sender> : <preview>"`.
pub fn latest_preview(chat: &Chat) -> Option<String> {
    chat.latest_message
        .as_ref()
        .map(|m| format!("{} : {}", m.sender.name, preview_content(&m.content)))
}
