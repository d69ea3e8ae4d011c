//! Strict validation of model output against the plan schema.
//!
//! The JSON schema is derived from the [`Plan`] types with schemars and
//! compiled once with jsonschema. Validation is all-or-nothing: the first
//! violation rejects the whole document and nothing is coerced or repaired.

use std::sync::OnceLock;

use jsonschema::{error::ValidationErrorKind, ValidationError, Validator};
use schemars::{schema_for, Schema};
use serde_json::Value;

use crate::{
    error::{ContentError, Result},
    models::Plan,
};

static PLAN_VALIDATOR: OnceLock<std::result::Result<Validator, String>> = OnceLock::new();

/// JSON schema every generated plan must satisfy.
pub fn plan_schema() -> Schema {
    schema_for!(Plan)
}

fn plan_validator() -> Result<&'static Validator> {
    PLAN_VALIDATOR
        .get_or_init(|| {
            jsonschema::draft202012::new(plan_schema().as_value()).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|reason| ContentError::schema("", format!("plan schema failed to compile: {reason}")))
}

/// Converts a JSON pointer such as `/topics/0/shots` into `topics[0].shots`.
fn display_path(pointer: &str) -> String {
    let mut path = String::new();
    for segment in pointer.split('/').filter(|s| !s.is_empty()) {
        if segment.chars().all(|c| c.is_ascii_digit()) {
            path.push_str(&format!("[{segment}]"));
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);
        }
    }
    path
}

/// Path of the value an error is about. For a missing property that is the
/// property itself rather than the object that lacks it.
fn error_path(error: &ValidationError<'_>) -> String {
    let mut pointer = error.instance_path.to_string();
    if let ValidationErrorKind::Required { property } = &error.kind {
        let name = property
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| property.to_string());
        pointer.push('/');
        pointer.push_str(&name);
    }
    display_path(&pointer)
}

/// Validates a parsed JSON document and converts it into a [`Plan`].
///
/// # Errors
///
/// Returns `ContentError::SchemaValidation` naming the first offending path.
pub fn validate_plan(value: Value) -> Result<Plan> {
    let validator = plan_validator()?;

    if let Some(error) = validator.iter_errors(&value).next() {
        return Err(ContentError::schema(error_path(&error), error.to_string()));
    }

    deserialize_plan(value)
}

/// Converts an already validated document, naming the path on failure.
fn deserialize_plan(value: Value) -> Result<Plan> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        let path = if path == "." { String::new() } else { path };
        ContentError::schema(path, e.into_inner().to_string())
    })
}
