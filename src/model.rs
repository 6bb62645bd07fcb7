//! Wire records shared with the chat backend.
//!
//! Field names follow the server's JSON (`_id`, `isGroupChat`, `latestMessage`, ...);
//! unknown fields are ignored so the client tolerates a richer payload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a user account.
    UserId
);
string_id!(
    /// Identifier of a conversation.
    ChatId
);
string_id!(
    /// Identifier of a single message.
    MessageId
);

/// Public profile of a user, as embedded in chats and messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Avatar image reference
    #[serde(rename = "pic", default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            avatar: None,
        }
    }
}

/// The signed-in user together with the bearer credential for API calls.
///
/// This is the persisted session record; it flattens to the same JSON object
/// the server returns on login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(flatten)]
    pub profile: User,
    pub token: String,
}

impl AuthUser {
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }
}

/// A message in a conversation transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: MessageId,
    pub sender: User,
    pub content: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(id: impl Into<MessageId>, sender: User, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender,
            content: content.into(),
            created_at: None,
        }
    }
}

/// A one-to-one or group conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(rename = "_id")]
    pub id: ChatId,
    #[serde(rename = "isGroupChat", default)]
    pub is_group: bool,
    /// Display name; only group chats carry one.
    #[serde(rename = "chatName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
    /// Denormalized last message, used for the list preview.
    #[serde(rename = "latestMessage", default, skip_serializing_if = "Option::is_none")]
    pub latest_message: Option<Message>,
    #[serde(rename = "groupAdmin", default, skip_serializing_if = "Option::is_none")]
    pub group_admin: Option<User>,
}

impl Chat {
    /// Two-party conversation between the given users.
    pub fn direct(id: impl Into<ChatId>, users: Vec<User>) -> Self {
        Self {
            id: id.into(),
            is_group: false,
            name: None,
            users,
            latest_message: None,
            group_admin: None,
        }
    }

    /// Named group conversation.
    pub fn group(id: impl Into<ChatId>, name: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            id: id.into(),
            is_group: true,
            name: Some(name.into()),
            users,
            latest_message: None,
            group_admin: None,
        }
    }

    pub fn with_latest(mut self, message: Message) -> Self {
        self.latest_message = Some(message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_from_server_json() {
        let json = r#"{
            "_id": "c1",
            "chatName": "sender",
            "isGroupChat": false,
            "users": [
                {"_id": "u1", "name": "Alice", "email": "a@x.io", "pic": "https://x.io/a.png"},
                {"_id": "u2", "name": "Bob", "email": "b@x.io"}
            ],
            "latestMessage": {
                "_id": "m9",
                "sender": {"_id": "u2", "name": "Bob", "email": "b@x.io"},
                "content": "see you",
                "chat": "c1",
                "createdAt": "2024-03-01T10:15:00.000Z"
            },
            "createdAt": "2024-02-01T09:00:00.000Z",
            "__v": 0
        }"#;

        let chat: Chat = serde_json::from_str(json).unwrap();
        assert_eq!(chat.id, ChatId::from("c1"));
        assert!(!chat.is_group);
        assert_eq!(chat.users.len(), 2);
        assert_eq!(chat.users[0].avatar.as_deref(), Some("https://x.io/a.png"));
        let latest = chat.latest_message.unwrap();
        assert_eq!(latest.sender.name, "Bob");
        assert!(latest.created_at.is_some());
    }

    #[test]
    fn test_auth_user_flattens_profile() {
        let json = r#"{"_id":"u1","name":"Alice","email":"a@x.io","pic":"p.png","token":"jwt"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id(), &UserId::from("u1"));
        assert_eq!(user.profile.name, "Alice");
        assert_eq!(user.token, "jwt");
    }

    #[test]
    fn test_auth_user_requires_token() {
        let json = r#"{"_id":"u1","name":"Alice"}"#;
        assert!(serde_json::from_str::<AuthUser>(json).is_err());
    }
}
