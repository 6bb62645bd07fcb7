//! Sender grouping for the transcript.
//!
//! A *run* is a maximal stretch of consecutive messages from one sender. Each
//! row's avatar, left offset and top spacing are decided from the sender
//! continuity around it:
//!
//! - an incoming run shows its avatar (with a name tooltip) on its last message
//! - rows without an avatar are indented by the avatar gutter so text lines up
//! - the first message of a run gets a wider top gap than its continuations
//! - the signed-in user's own messages never carry an avatar
//!
//! All functions index `messages` directly; passing an index outside the slice
//! is a caller bug and panics.

use crate::model::{Message, UserId};

/// Width reserved for the avatar column on rows that do not draw one.
pub const AVATAR_GUTTER: f32 = 33.0;
/// Top spacing above the first message of a run.
pub const RUN_BREAK_SPACING: f32 = 10.0;
/// Top spacing between messages of the same run.
pub const RUN_CONTINUE_SPACING: f32 = 3.0;

/// Horizontal offset of a message bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftMargin {
    /// No offset: an avatar sits in front of the bubble, or the row is our own.
    Flush,
    /// Indent by [`AVATAR_GUTTER`] to align with rows that show an avatar.
    Gutter,
}

impl LeftMargin {
    pub fn points(self) -> f32 {
        match self {
            LeftMargin::Flush => 0.0,
            LeftMargin::Gutter => AVATAR_GUTTER,
        }
    }
}

/// Which edge of the transcript a row hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Incoming,
    Outgoing,
}

/// Every display decision for one transcript row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    pub side: Side,
    pub show_avatar: bool,
    pub left_margin: LeftMargin,
    pub top_of_run: bool,
}

impl RowLayout {
    pub fn top_spacing(&self) -> f32 {
        if self.top_of_run {
            RUN_BREAK_SPACING
        } else {
            RUN_CONTINUE_SPACING
        }
    }
}

fn is_own(message: &Message, current_user: &UserId) -> bool {
    &message.sender.id == current_user
}

/// True when message `i` closes an incoming run that is followed by another sender.
///
/// The final message of the transcript never qualifies; it is covered by
/// [`is_last_from_other`].
pub fn ends_run(messages: &[Message], i: usize, current_user: &UserId) -> bool {
    let message = &messages[i];
    match messages.get(i + 1) {
        Some(next) => next.sender.id != message.sender.id && !is_own(message, current_user),
        None => false,
    }
}

/// True when `i` is the last message of the transcript and someone else sent it.
pub fn is_last_from_other(messages: &[Message], i: usize, current_user: &UserId) -> bool {
    i + 1 == messages.len() && !is_own(&messages[i], current_user)
}

/// Whether row `i` draws the sender's avatar and name tooltip.
pub fn shows_avatar(messages: &[Message], i: usize, current_user: &UserId) -> bool {
    ends_run(messages, i, current_user) || is_last_from_other(messages, i, current_user)
}

/// Left offset for row `i`.
pub fn left_margin(messages: &[Message], i: usize, current_user: &UserId) -> LeftMargin {
    if is_own(&messages[i], current_user) || shows_avatar(messages, i, current_user) {
        LeftMargin::Flush
    } else {
        LeftMargin::Gutter
    }
}

/// True when message `i` starts a run (the first message always does).
pub fn is_top_of_run(messages: &[Message], i: usize) -> bool {
    let message = &messages[i];
    match i.checked_sub(1).map(|prev| &messages[prev]) {
        Some(prev) => prev.sender.id != message.sender.id,
        None => true,
    }
}

/// Compute the layout of every row in one pass.
pub fn layout_rows(messages: &[Message], current_user: &UserId) -> Vec<RowLayout> {
    (0..messages.len())
        .map(|i| RowLayout {
            side: if is_own(&messages[i], current_user) {
                Side::Outgoing
            } else {
                Side::Incoming
            },
            show_avatar: shows_avatar(messages, i, current_user),
            left_margin: left_margin(messages, i, current_user),
            top_of_run: is_top_of_run(messages, i),
        })
        .collect()
}
