//! Wire types shared with the ITAM auth API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Telegram login-widget payload forwarded to the login and register endpoints.
///
/// Optional widget fields are sent as empty strings, matching what the
/// backend binds when a field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramAuth {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub photo_url: String,
    pub auth_date: i64,
    pub hash: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Human-readable message combining `error` and `details`.
    #[must_use]
    pub fn message(&self) -> String {
        match self.details.as_deref() {
            Some(details) if !details.is_empty() => format!("{}: {details}", self.error),
            _ => self.error.clone(),
        }
    }
}
