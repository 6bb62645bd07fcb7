//! REST access to the chat server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::model::{Chat, ChatId, Message};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read operations the client needs from the server.
#[async_trait]
pub trait ChatApi: Send + Sync + 'static {
    /// All conversations visible to the bearer of `token`, in server order.
    async fn fetch_chats(&self, token: &str) -> Result<Vec<Chat>>;

    /// The full transcript of `chat`, oldest first.
    async fn fetch_messages(&self, token: &str, chat: &ChatId) -> Result<Vec<Message>>;
}

/// `ChatApi` over HTTP with bearer authentication.
pub struct HttpChatApi {
    client: Client,
    base_url: String,
}

impl HttpChatApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn fetch_chats(&self, token: &str) -> Result<Vec<Chat>> {
        self.get_json("/api/chat", token).await
    }

    async fn fetch_messages(&self, token: &str, chat: &ChatId) -> Result<Vec<Message>> {
        self.get_json(&format!("/api/message/{}", chat), token).await
    }
}
