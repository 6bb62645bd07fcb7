//! Chat list synchronization.
//!
//! The synchronizer owns the [`ChatListWriter`] and reloads the list on mount
//! and whenever the app's [`FetchTrigger`] changes. A successful response
//! replaces the list wholesale. A failure leaves the previous list in place and
//! raises one error toast.
//!
//! Overlapping fetches are not cancelled on the wire. Every fetch carries a
//! request id and only the response to the most recent request is applied;
//! responses to superseded requests are dropped, failures included.

use crossbeam_channel::Sender;
use tokio::sync::watch;

use crate::model::Chat;
use crate::notify::{Notifier, Toast};
use crate::protocol::{BackendAction, RequestId};
use crate::state::{ChatListWriter, SessionReader};

/// Staleness signal owned by the parent scope. Only changes matter, not the value.
pub struct FetchTrigger {
    tx: watch::Sender<u64>,
}

impl Default for FetchTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchTrigger {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Signal that the chat list may be stale.
    pub fn bump(&self) {
        self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
    }

    /// Observe future changes; the current state counts as already seen.
    pub fn subscribe(&self) -> TriggerSubscription {
        TriggerSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiving side of a [`FetchTrigger`].
pub struct TriggerSubscription {
    rx: watch::Receiver<u64>,
}

impl TriggerSubscription {
    /// True once per batch of bumps since the previous call.
    pub fn take_change(&mut self) -> bool {
        match self.rx.has_changed() {
            Ok(true) => {
                self.rx.borrow_and_update();
                true
            }
            _ => false,
        }
    }
}

/// Result of one chat list fetch as seen by the UI.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Loaded(Vec<Chat>),
    Failed(String),
}

pub struct ChatListSynchronizer {
    session: SessionReader,
    chats: ChatListWriter,
    trigger: TriggerSubscription,
    action_tx: Sender<BackendAction>,
    latest_request: RequestId,
    pending: Option<RequestId>,
    mounted: bool,
}

impl ChatListSynchronizer {
    pub fn new(
        session: SessionReader,
        chats: ChatListWriter,
        trigger: TriggerSubscription,
        action_tx: Sender<BackendAction>,
    ) -> Self {
        Self {
            session,
            chats,
            trigger,
            action_tx,
            latest_request: 0,
            pending: None,
            mounted: false,
        }
    }

    /// Call once per frame. Refreshes on the first call and after each trigger change.
    ///
    /// Returns whether a refresh was issued.
    pub fn poll(&mut self, notifier: &mut dyn Notifier) -> bool {
        let due = if !self.mounted {
            self.mounted = true;
            // Bumps made before mount are covered by the initial load.
            self.trigger.take_change();
            true
        } else {
            self.trigger.take_change()
        };

        if due {
            self.refresh(notifier);
        }
        due
    }

    /// Issue a fetch of every chat visible to the session user.
    pub fn refresh(&mut self, notifier: &mut dyn Notifier) {
        self.latest_request += 1;
        let request = self.latest_request;
        tracing::debug!(request, "refreshing chat list");

        let action = BackendAction::FetchChats {
            request,
            token: self.session.token(),
        };
        if self.action_tx.send(action).is_err() {
            tracing::error!(request, "backend is gone, cannot refresh chat list");
            self.apply(request, FetchOutcome::Failed("backend channel closed".into()), notifier);
            return;
        }
        self.pending = Some(request);
    }

    /// Apply the outcome of fetch `request`.
    pub fn apply(&mut self, request: RequestId, outcome: FetchOutcome, notifier: &mut dyn Notifier) {
        if request != self.latest_request {
            tracing::debug!(request, latest = self.latest_request, "dropping superseded chat list response");
            return;
        }
        self.pending = None;

        match outcome {
            FetchOutcome::Loaded(chats) => {
                tracing::info!(count = chats.len(), "chat list updated");
                self.chats.replace(chats);
            }
            FetchOutcome::Failed(reason) => {
                tracing::warn!(%reason, "failed to load chats");
                notifier.notify(Toast::chat_list_failed());
            }
        }
    }

    /// Whether the latest fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{unbounded, Receiver};

    use crate::model::{AuthUser, ChatId, User};
    use crate::state::{SessionContext, SessionHandles};

    struct Fixture {
        sync: ChatListSynchronizer,
        trigger: FetchTrigger,
        reader: SessionReader,
        actions: Receiver<BackendAction>,
    }

    fn fixture() -> Fixture {
        let SessionHandles {
            reader,
            chats,
            selection: _,
        } = SessionContext::new(AuthUser {
            profile: User::new("u1", "Alice"),
            token: "jwt".into(),
        });
        let trigger = FetchTrigger::new();
        let (action_tx, actions) = unbounded();
        let sync = ChatListSynchronizer::new(reader.clone(), chats, trigger.subscribe(), action_tx);
        Fixture {
            sync,
            trigger,
            reader,
            actions,
        }
    }

    fn chat(id: &str) -> Chat {
        Chat::direct(id, vec![User::new("u1", "Alice"), User::new("u2", "Bob")])
    }

    fn sent_requests(actions: &Receiver<BackendAction>) -> Vec<RequestId> {
        actions
            .try_iter()
            .filter_map(|a| match a {
                BackendAction::FetchChats { request, token } => {
                    assert_eq!(token, "jwt");
                    Some(request)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_trigger_reports_each_batch_once() {
        let trigger = FetchTrigger::new();
        let mut sub = trigger.subscribe();
        assert!(!sub.take_change());
        trigger.bump();
        trigger.bump();
        assert!(sub.take_change());
        assert!(!sub.take_change());
    }

    #[test]
    fn test_refresh_on_mount_only_once() {
        let mut f = fixture();
        let mut toasts = Vec::new();
        assert!(f.sync.poll(&mut toasts));
        assert!(!f.sync.poll(&mut toasts));
        assert!(!f.sync.poll(&mut toasts));
        assert_eq!(sent_requests(&f.actions), vec![1]);
    }

    #[test]
    fn test_refresh_once_per_trigger_change() {
        let mut f = fixture();
        let mut toasts = Vec::new();
        f.sync.poll(&mut toasts);

        f.trigger.bump();
        assert!(f.sync.poll(&mut toasts));
        assert!(!f.sync.poll(&mut toasts));

        f.trigger.bump();
        f.trigger.bump();
        assert!(f.sync.poll(&mut toasts));
        assert_eq!(sent_requests(&f.actions), vec![1, 2, 3]);
    }

    #[test]
    fn test_success_replaces_list() {
        let mut f = fixture();
        let mut toasts = Vec::new();
        f.sync.poll(&mut toasts);
        f.sync.apply(1, FetchOutcome::Loaded(vec![chat("c1"), chat("c2")]), &mut toasts);

        f.trigger.bump();
        f.sync.poll(&mut toasts);
        assert!(f.sync.is_loading());
        f.sync.apply(2, FetchOutcome::Loaded(vec![chat("c3")]), &mut toasts);
        assert!(!f.sync.is_loading());

        let ids: Vec<ChatId> = f.reader.chats().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ChatId::from("c3")]);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_failure_keeps_list_and_notifies_once() {
        let mut f = fixture();
        let mut toasts = Vec::new();
        f.sync.poll(&mut toasts);
        f.sync.apply(1, FetchOutcome::Loaded(vec![chat("c1")]), &mut toasts);

        f.trigger.bump();
        f.sync.poll(&mut toasts);
        let before = f.reader.chats();
        f.sync.apply(2, FetchOutcome::Failed("500".into()), &mut toasts);

        assert_eq!(f.reader.chats(), before);
        assert_eq!(toasts, vec![Toast::chat_list_failed()]);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut f = fixture();
        let mut toasts = Vec::new();
        f.sync.poll(&mut toasts);
        f.trigger.bump();
        f.sync.poll(&mut toasts);

        f.sync.apply(2, FetchOutcome::Loaded(vec![chat("new")]), &mut toasts);
        f.sync.apply(1, FetchOutcome::Loaded(vec![chat("old")]), &mut toasts);
        f.sync.apply(1, FetchOutcome::Failed("late".into()), &mut toasts);

        let ids: Vec<ChatId> = f.reader.chats().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ChatId::from("new")]);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_closed_backend_reports_failure() {
        let mut f = fixture();
        drop(f.actions);
        let mut toasts = Vec::new();
        f.sync.poll(&mut toasts);
        assert_eq!(toasts.len(), 1);
        assert!(f.reader.chats().is_none());
        assert!(!f.sync.is_loading());
    }
}
