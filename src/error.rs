//! Normalized API errors surfaced to pages.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers failures with a JSON object, either `{"error": ...}` or
//! Django form errors keyed by field (`{"username": ["..."]}`). Pages only
//! ever show one line of text, so every failed call collapses into an
//! [`ApiError`] carrying that object, or a fixed per-operation fallback when
//! the response had no usable body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::net::http::HttpError;

/// Error body as sent by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(pub Map<String, Value>);

impl ErrorPayload {
    /// Payload with a single `error` entry.
    pub fn fallback(message: &str) -> Self {
        let mut map = Map::new();
        map.insert("error".to_owned(), Value::String(message.to_owned()));
        Self(map)
    }

    /// Text for one field; list values are joined with spaces.
    pub fn field(&self, name: &str) -> Option<String> {
        let text = match self.0.get(name)? {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned))
                .collect::<Vec<_>>()
                .join(" "),
            other => other.to_string(),
        };
        if text.is_empty() { None } else { Some(text) }
    }

    /// The primary message: `error`, then `detail`, then `non_field_errors`.
    pub fn message(&self) -> Option<String> {
        self.field("error")
            .or_else(|| self.field("detail"))
            .or_else(|| self.field("non_field_errors"))
    }

    fn display_message(&self) -> String {
        self.message().unwrap_or_else(|| "request failed".to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the call with a JSON object body.
    #[error("{}", .0.display_message())]
    Response(ErrorPayload),
    /// No usable body (network failure, non-JSON reply); carries the
    /// operation's fixed message.
    #[error("{}", .0.display_message())]
    Fallback(ErrorPayload),
}

impl ApiError {
    /// Collapse a transport-level failure into the payload shown to users.
    pub fn normalize(err: HttpError, fallback: &str) -> Self {
        match err {
            HttpError::Status { body: Some(Value::Object(map)), .. } => Self::Response(ErrorPayload(map)),
            _ => Self::Fallback(ErrorPayload::fallback(fallback)),
        }
    }

    pub fn fallback(message: &str) -> Self {
        Self::Fallback(ErrorPayload::fallback(message))
    }

    pub fn payload(&self) -> &ErrorPayload {
        match self {
            Self::Response(payload) | Self::Fallback(payload) => payload,
        }
    }

    pub fn message(&self) -> Option<String> {
        self.payload().message()
    }
}
