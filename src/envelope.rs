//! Detection of the API's `{"status": "error", "message": ...}` failure envelope.
//!
//! Callers run these checks before handing a body to the normalizer or the
//! bucketer, so those transforms never see an error payload.

use serde_json::Value;

use crate::errors::{DashboardError, Result};

const UNKNOWN_ERROR: &str = "unknown error";

/// Returns the body unchanged unless it is an error envelope.
pub fn check(value: &Value) -> Result<&Value> {
    match error_message(value) {
        Some(message) => Err(DashboardError::Api {
            endpoint: None,
            message,
        }),
        None => Ok(value),
    }
}

/// Like [`check`], naming the endpoint in the resulting error.
pub fn check_named<'a>(endpoint: &str, value: &'a Value) -> Result<&'a Value> {
    check(value).map_err(|err| match err {
        DashboardError::Api { message, .. } => DashboardError::Api {
            endpoint: Some(endpoint.to_string()),
            message,
        },
        other => other,
    })
}

fn error_message(value: &Value) -> Option<String> {
    let map = value.as_object()?;
    if map.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }
    let message = map
        .get("message")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNKNOWN_ERROR);
    Some(message.to_string())
}
