//! Shared error types.

use serde::Deserialize;
use thiserror::Error;

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// The API no longer recognises the session cookie.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{value}`: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Failures while turning a picked file into an upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("failed to read `{name}`: {reason}")]
    ReadFailed { name: String, reason: String },
}

/// Name checks run before a profile update is dispatched.
///
/// The `Display` text is exactly what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is mandatory")]
    NameMissing,
    #[error("Name cannot be less than 5 characters")]
    NameTooShort,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    #[serde(default)]
    message: Option<String>,
}

/// Pull the `message` out of the API's `{ success, message }` JSON envelope.
pub fn try_server_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<MessageEnvelope>(body).ok()?;
    parsed.message.filter(|m| !m.trim().is_empty())
}
