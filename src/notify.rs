//! Transient user notifications (toasts).

use std::time::{Duration, Instant};

/// How long the standard error toasts stay on screen.
pub const ERROR_TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Screen anchor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
}

/// A notification request.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub auto_dismiss: Duration,
    pub dismissible: bool,
    pub position: ToastPosition,
}

impl Toast {
    /// The chat list could not be fetched.
    pub fn chat_list_failed() -> Self {
        Self {
            title: "Error Occured!".into(),
            description: "Failed to Load the chats".into(),
            severity: Severity::Error,
            auto_dismiss: ERROR_TOAST_DURATION,
            dismissible: true,
            position: ToastPosition::BottomLeft,
        }
    }

    /// The selected chat's messages could not be fetched.
    pub fn messages_failed() -> Self {
        Self {
            title: "Error Occured!".into(),
            description: "Failed to Load the Messages".into(),
            severity: Severity::Error,
            auto_dismiss: ERROR_TOAST_DURATION,
            dismissible: true,
            position: ToastPosition::Bottom,
        }
    }

    /// Generic backend failure.
    pub fn backend_error(description: impl Into<String>) -> Self {
        Self {
            title: "Backend error".into(),
            description: description.into(),
            severity: Severity::Error,
            auto_dismiss: ERROR_TOAST_DURATION,
            dismissible: true,
            position: ToastPosition::BottomLeft,
        }
    }
}

/// Anything that can surface a toast to the user.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Collecting toasts in a `Vec` is enough to observe them in tests.
impl Notifier for Vec<Toast> {
    fn notify(&mut self, toast: Toast) {
        self.push(toast);
    }
}

/// Toasts currently on screen, with their creation time.
#[derive(Default)]
pub struct ToastQueue {
    entries: Vec<(Toast, Instant)>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|(t, _)| t)
    }

    /// Drop toasts whose auto-dismiss time has elapsed at `now`.
    pub fn purge_expired(&mut self, now: Instant) {
        self.entries
            .retain(|(toast, created)| now.saturating_duration_since(*created) < toast.auto_dismiss);
    }

    /// Close the toast at `index` if it allows manual dismissal.
    pub fn dismiss(&mut self, index: usize) {
        if self.entries.get(index).is_some_and(|(t, _)| t.dismissible) {
            self.entries.remove(index);
        }
    }

    fn push_at(&mut self, toast: Toast, created: Instant) {
        self.entries.push((toast, created));
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        tracing::debug!(title = %toast.title, description = %toast.description, "toast");
        self.push_at(toast, Instant::now());
    }
}
