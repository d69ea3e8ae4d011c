//! Wire types and the HTTP transport for chat-completion endpoints.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body of a chat-completion call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// Status and body of an HTTP exchange, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Response envelope; only the first choice's content is used.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

/// Sends one chat-completion request.
///
/// Implementations report every HTTP status as a [`RawResponse`]; only
/// failures that never produced a status are errors.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, url: &str, api_key: &str, request: &ChatRequest) -> Result<RawResponse>;
}

/// [`ChatTransport`] over reqwest with bearer authentication.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, url: &str, api_key: &str, request: &ChatRequest) -> Result<RawResponse> {
        debug!("POST {url} model={}", request.model);

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            // The status alone still classifies a failed exchange.
            Err(e) if !status.is_success() => {
                warn!("Failed to read body of HTTP {status} response: {e}");
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
