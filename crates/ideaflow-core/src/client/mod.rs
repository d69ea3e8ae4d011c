//! Model client: one chat-completion call per plan, validated strictly.
//!
//! [`ModelClient::generate`] performs exactly one request. The sequence is
//! fixed and every step fails fast:
//!
//! 1. credential present, else `Configuration` (no network I/O happens)
//! 2. POST the system role and the prompt within the configured deadline,
//!    else `Timeout`
//! 3. non-2xx status, else `Transport` with the raw body
//! 4. first choice has content, else `EmptyResponse`
//! 5. content parses as JSON, else `MalformedOutput`
//! 6. JSON matches the plan schema, else `SchemaValidation`

mod transport;

use std::{sync::Arc, time::Duration};

use log::{debug, warn};

pub use transport::{ChatMessage, ChatRequest, ChatTransport, HttpTransport, RawResponse};
use transport::ChatResponse;

use crate::{
    error::{ContentError, Result},
    models::Plan,
    prompt::SYSTEM_PROMPT,
    schema::validate_plan,
};

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
/// Moderate sampling temperature: creative variety, structure still likely.
pub const TEMPERATURE: f32 = 0.7;

/// Call-independent model configuration, injected at construction.
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    /// Bearer credential; checked on every call, not at construction
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Never print the credential.
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the external chat-completion endpoint.
#[derive(Clone)]
pub struct ModelClient {
    config: ModelConfig,
    transport: Arc<dyn ChatTransport>,
}

impl ModelClient {
    pub fn new(config: ModelConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ContentError::configuration(
                    "OPENAI_API_KEY is not set; cannot call the model to generate a content plan",
                )
            })
    }

    /// Request body for a prompt.
    pub fn request_for(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        }
    }

    /// Sends the prompt and returns the validated plan.
    ///
    /// # Errors
    ///
    /// See the module documentation for the error raised at each step.
    pub async fn generate(&self, prompt: &str) -> Result<Plan> {
        let api_key = self.api_key()?;
        let request = self.request_for(prompt);

        debug!(
            "Requesting plan from {} ({} prompt chars)",
            self.config.model,
            prompt.chars().count()
        );

        let response = tokio::time::timeout(
            self.config.timeout,
            self.transport.send(&self.config.api_url, api_key, &request),
        )
        .await
        .map_err(|_| ContentError::Timeout {
            after: self.config.timeout,
        })??;

        if !response.is_success() {
            warn!("Model endpoint returned HTTP {}", response.status);
            return Err(ContentError::Transport {
                status: response.status,
                body: response.body,
            });
        }

        let content = serde_json::from_str::<ChatResponse>(&response.body)
            .map_err(|e| {
                warn!("Unreadable completion envelope: {e}");
                ContentError::EmptyResponse
            })?
            .into_content()
            .filter(|content| !content.is_empty())
            .ok_or(ContentError::EmptyResponse)?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|source| ContentError::MalformedOutput { source, content })?;

        validate_plan(value)
    }
}
