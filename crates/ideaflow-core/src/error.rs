//! Error types for content plan generation.

use std::time::Duration;

use thiserror::Error;

/// Every way a content plan request can fail.
///
/// All variants are terminal for the call that produced them; nothing in this
/// crate retries.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Caller-supplied brief violates the input schema
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Required configuration (the API credential) is missing
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Model endpoint answered with a non-success status
    #[error("Model endpoint returned HTTP {status}: {body}")]
    Transport { status: u16, body: String },
    /// Request never produced an HTTP status (connect, TLS, body read)
    #[error("Model request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },
    /// HTTP success but no usable message content
    #[error("Model returned an empty response")]
    EmptyResponse,
    /// Message content is not JSON at all
    #[error("Model output is not valid JSON: {source}")]
    MalformedOutput {
        #[source]
        source: serde_json::Error,
        content: String,
    },
    /// Parsed JSON does not match the plan schema
    #[error("Model output does not match the plan schema at '{path}': {reason}")]
    SchemaValidation { path: String, reason: String },
    /// Model call exceeded its deadline
    #[error("Model request timed out after {}s", after.as_secs())]
    Timeout { after: Duration },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ContentError {
        ContentError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ContentError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a schema validation error for the given path.
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaValidation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Stable snake_case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Configuration { .. } => "configuration",
            Self::Transport { .. } | Self::Request { .. } => "transport",
            Self::EmptyResponse => "empty_response",
            Self::MalformedOutput { .. } => "malformed_output",
            Self::SchemaValidation { .. } => "schema_validation",
            Self::Timeout { .. } => "timeout",
        }
    }

    /// Raw response body of a failed HTTP exchange.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Transport { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Offending path of a schema mismatch.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether the caller, not the model or the environment, is at fault.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for content plan operations
pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = ContentError::invalid_input("idea").with_reason("too short");
        assert_eq!(err.kind(), "validation");
        assert!(err.is_caller_error());
        assert_eq!(err.to_string(), "Invalid input for field 'idea': too short");
    }

    #[test]
    fn test_transport_body_is_retrievable() {
        let err = ContentError::Transport {
            status: 500,
            body: "upstream exploded".to_string(),
        };
        assert_eq!(err.kind(), "transport");
        assert_eq!(err.body(), Some("upstream exploded"));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_schema_error_path() {
        let err = ContentError::schema("topics[0].shots", "missing");
        assert_eq!(err.path(), Some("topics[0].shots"));
        assert_eq!(ContentError::EmptyResponse.path(), None);
    }

    #[test]
    fn test_timeout_message() {
        let err = ContentError::Timeout {
            after: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "Model request timed out after 30s");
    }
}
