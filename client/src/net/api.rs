//! REST API helpers for the ITAM auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so login/registration
//! failures surface as page messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::TelegramAuth;

/// Base URL of the API, fixed at compile time via `API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

pub const LOGIN_PATH: &str = "/auth/api/login";
pub const REGISTER_PATH: &str = "/auth/api/register";

/// Failures from API calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Full URL for an API `path`.
#[must_use]
pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorResponse>(body)
        .map(|err| err.message())
        .unwrap_or_else(|_| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(path: &str, auth: &TelegramAuth) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .json(auth)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
}

/// Exchange a Telegram payload for a session token via `POST /auth/api/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the API rejects the payload, or the
/// response lacks a token.
pub async fn login(auth: &TelegramAuth) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: super::types::TokenResponse = post_json(LOGIN_PATH, auth).await?;
        if body.token.is_empty() {
            return Err(ApiError::Parse("empty token".to_owned()));
        }
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Unavailable)
    }
}

/// Register a new account from a Telegram payload via `POST /auth/api/register`.
///
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the payload.
pub async fn register(auth: &TelegramAuth) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: super::types::MessageResponse = post_json(REGISTER_PATH, auth).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Unavailable)
    }
}
