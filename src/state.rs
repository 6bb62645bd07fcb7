//! Session state shared by the chat list, the chat panel and the transcript.
//!
//! The state lives behind one `Rc<RefCell<_>>` on the UI thread and is handed
//! out as three handles so that each field has exactly one writer:
//!
//! - [`SessionReader`]: cloneable, read-only access for every panel
//! - [`ChatListWriter`]: replaces the chat list (owned by the synchronizer)
//! - [`SelectionWriter`]: moves the selection pointer (owned by the chat list panel)
//!
//! The writer handles are not `Clone`; [`SessionContext::new`] is the only way
//! to obtain them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{AuthUser, Chat, ChatId};

#[derive(Debug)]
struct Session {
    user: AuthUser,
    /// `None` until the first successful fetch.
    chats: Option<Vec<Chat>>,
    selected: Option<ChatId>,
}

/// Constructor for the session handles.
pub struct SessionContext;

/// The three handles over one session.
pub struct SessionHandles {
    pub reader: SessionReader,
    pub chats: ChatListWriter,
    pub selection: SelectionWriter,
}

impl SessionContext {
    /// Start a session for a signed-in user with an unpopulated chat list.
    pub fn new(user: AuthUser) -> SessionHandles {
        let inner = Rc::new(RefCell::new(Session {
            user,
            chats: None,
            selected: None,
        }));
        SessionHandles {
            reader: SessionReader(Rc::clone(&inner)),
            chats: ChatListWriter(Rc::clone(&inner)),
            selection: SelectionWriter(inner),
        }
    }
}

/// Read-only view of the session.
#[derive(Clone)]
pub struct SessionReader(Rc<RefCell<Session>>);

impl SessionReader {
    pub fn user(&self) -> AuthUser {
        self.0.borrow().user.clone()
    }

    pub fn token(&self) -> String {
        self.0.borrow().user.token.clone()
    }

    /// Snapshot of the chat list, `None` while it has never been loaded.
    pub fn chats(&self) -> Option<Vec<Chat>> {
        self.0.borrow().chats.clone()
    }

    pub fn chats_loaded(&self) -> bool {
        self.0.borrow().chats.is_some()
    }

    /// Raw selection pointer, which may name a chat no longer in the list.
    pub fn selected_id(&self) -> Option<ChatId> {
        self.0.borrow().selected.clone()
    }

    /// The selected chat, resolved against the current list.
    ///
    /// A pointer whose chat is missing from the latest list reads as no selection.
    pub fn selected_chat(&self) -> Option<Chat> {
        let session = self.0.borrow();
        let selected = session.selected.as_ref()?;
        session
            .chats
            .as_ref()?
            .iter()
            .find(|c| &c.id == selected)
            .cloned()
    }
}

/// Sole writer of the chat list.
pub struct ChatListWriter(Rc<RefCell<Session>>);

impl ChatListWriter {
    /// Replace the whole list; nothing from the previous list is kept.
    pub fn replace(&self, chats: Vec<Chat>) {
        self.0.borrow_mut().chats = Some(chats);
    }
}

/// Sole writer of the selection pointer.
pub struct SelectionWriter(Rc<RefCell<Session>>);

impl SelectionWriter {
    pub fn select(&self, chat: &ChatId) {
        self.0.borrow_mut().selected = Some(chat.clone());
    }

    pub fn clear(&self) {
        self.0.borrow_mut().selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn session() -> SessionHandles {
        SessionContext::new(AuthUser {
            profile: User::new("u1", "Alice"),
            token: "jwt".into(),
        })
    }

    fn chat(id: &str) -> Chat {
        Chat::direct(id, vec![User::new("u1", "Alice"), User::new("u2", "Bob")])
    }

    #[test]
    fn test_new_session_is_unpopulated() {
        let handles = session();
        assert!(!handles.reader.chats_loaded());
        assert!(handles.reader.chats().is_none());
        assert!(handles.reader.selected_chat().is_none());
        assert_eq!(handles.reader.token(), "jwt");
    }

    #[test]
    fn test_replace_supersedes_previous_list() {
        let handles = session();
        handles.chats.replace(vec![chat("c1"), chat("c2")]);
        handles.chats.replace(vec![chat("c3")]);
        let ids: Vec<ChatId> = handles.reader.chats().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ChatId::from("c3")]);
    }

    #[test]
    fn test_selection_survives_refresh_when_present() {
        let handles = session();
        handles.chats.replace(vec![chat("c1"), chat("c2")]);
        handles.selection.select(&ChatId::from("c2"));
        handles.chats.replace(vec![chat("c2"), chat("c1")]);
        assert_eq!(handles.reader.selected_chat().map(|c| c.id), Some(ChatId::from("c2")));
    }

    #[test]
    fn test_selection_reads_empty_when_chat_disappears() {
        let handles = session();
        handles.chats.replace(vec![chat("c1")]);
        handles.selection.select(&ChatId::from("c1"));
        handles.chats.replace(vec![chat("c2")]);
        assert!(handles.reader.selected_chat().is_none());
        assert_eq!(handles.reader.selected_id(), Some(ChatId::from("c1")));
    }

    #[test]
    fn test_clear_selection() {
        let handles = session();
        handles.chats.replace(vec![chat("c1")]);
        handles.selection.select(&ChatId::from("c1"));
        handles.selection.clear();
        assert!(handles.reader.selected_id().is_none());
    }
}
