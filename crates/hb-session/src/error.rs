//! Session error types.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while obtaining a session credential.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No active session")]
    NoActiveSession,

    #[error("Failed to configure session client: {0}")]
    Config(String),

    #[error("Token fetch failed: {0}")]
    TokenFetch(String),

    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl SessionError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn token_fetch(msg: impl Into<String>) -> Self {
        Self::TokenFetch(msg.into())
    }
}
