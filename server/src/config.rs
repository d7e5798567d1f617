//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values from the file and
//! the process environment are read the same way. Leptos settings
//! (`LEPTOS_SITE_ROOT`, `LEPTOS_OUTPUT_NAME`, ...) are read separately by
//! `leptos::config::get_configuration`.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

/// Invalid host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
        };
        Ok(Self { port })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
