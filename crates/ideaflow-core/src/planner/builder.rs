//! Builder for creating and configuring ContentPlanner instances.

use std::{sync::Arc, time::Duration};

use super::ContentPlanner;
use crate::{
    client::{ChatTransport, HttpTransport, ModelClient, ModelConfig},
    error::{ContentError, Result},
};

/// Builder for creating and configuring ContentPlanner instances.
#[derive(Clone, Default)]
pub struct ContentPlannerBuilder {
    config: ModelConfig,
    transport: Option<Arc<dyn ChatTransport>>,
}

impl ContentPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API credential. An absent credential is accepted here and
    /// reported on the first generation call instead.
    pub fn with_api_key(mut self, api_key: Option<impl Into<String>>) -> Self {
        self.config.api_key = api_key.map(Into::into);
        self
    }

    /// Overrides the model identifier; `None` keeps the default.
    pub fn with_model(mut self, model: Option<impl Into<String>>) -> Self {
        if let Some(model) = model {
            self.config.model = model.into();
        }
        self
    }

    /// Overrides the chat-completion endpoint; `None` keeps the default.
    pub fn with_api_url(mut self, api_url: Option<impl Into<String>>) -> Self {
        if let Some(api_url) = api_url {
            self.config.api_url = api_url.into();
        }
        self
    }

    /// Sets the deadline for a single model call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Replaces the HTTP transport, e.g. with a test double.
    pub fn with_transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Configuration` if the timeout is zero or the
    /// HTTP client cannot be initialised.
    pub fn build(self) -> Result<ContentPlanner> {
        if self.config.timeout.is_zero() {
            return Err(ContentError::configuration("timeout must be greater than zero"));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let client = reqwest::Client::builder().build().map_err(|e| {
                    ContentError::configuration(format!("Failed to initialise HTTP client: {e}"))
                })?;
                Arc::new(HttpTransport::new(client))
            }
        };

        Ok(ContentPlanner::new(ModelClient::new(self.config, transport)))
    }
}
