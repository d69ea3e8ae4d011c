//! Error handling utilities for MCP server

use ideaflow_core::ContentError;
use rmcp::ErrorData;
use serde_json::{json, Value};

/// Helper to convert content errors to MCP errors
///
/// Caller mistakes become `invalid_params`; everything else is an internal
/// error. The error kind, and for upstream failures the HTTP status and raw
/// body, travel in the error data so clients can tell failures apart.
pub fn to_mcp_error(message: &str, error: &ContentError) -> ErrorData {
    let message = format!("{message}: {error}");
    let data = Some(error_data(error));

    if error.is_caller_error() {
        ErrorData::invalid_params(message, data)
    } else {
        ErrorData::internal_error(message, data)
    }
}

fn error_data(error: &ContentError) -> Value {
    let mut data = json!({ "kind": error.kind() });
    if let ContentError::Transport { status, body } = error {
        data["status"] = json!(status);
        data["body"] = json!(body);
    }
    if let Some(path) = error.path() {
        data["path"] = json!(path);
    }
    data
}
