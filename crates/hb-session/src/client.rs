//! Identity provider REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{SessionError, SessionResult};
use crate::provider::TokenProvider;

/// Session client configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the identity provider's backend API
    pub base_url: String,
    /// Backend API secret key
    pub secret_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl SessionConfig {
    /// Create config from environment variables.
    pub fn from_env() -> SessionResult<Self> {
        let base_url = std::env::var("IDENTITY_BASE_URL")
            .map_err(|_| SessionError::config("IDENTITY_BASE_URL must be set"))?;

        if base_url.is_empty() {
            return Err(SessionError::config("IDENTITY_BASE_URL cannot be empty"));
        }

        let secret_key = std::env::var("IDENTITY_SECRET_KEY")
            .map_err(|_| SessionError::config("IDENTITY_SECRET_KEY must be set"))?;

        let timeout_secs: u64 = std::env::var("IDENTITY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Wire shape of a minted token.
#[derive(Debug, Deserialize)]
struct MintedToken {
    jwt: String,
}

/// REST client minting per-audience tokens for one active session.
#[derive(Clone)]
pub struct SessionClient {
    http: Client,
    config: SessionConfig,
    session_id: String,
}

impl SessionClient {
    /// Create a client bound to an active session.
    pub fn new(config: SessionConfig, session_id: impl Into<String>) -> SessionResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("hb-session/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SessionError::Network)?;

        Ok(Self {
            http,
            config,
            session_id: session_id.into(),
        })
    }

    fn token_url(&self, audience: &str) -> String {
        format!(
            "{}/v1/sessions/{}/tokens/{}",
            self.config.base_url, self.session_id, audience
        )
    }
}

#[async_trait]
impl TokenProvider for SessionClient {
    async fn bearer_token(&self, audience: &str) -> SessionResult<String> {
        if self.session_id.is_empty() {
            return Err(SessionError::NoActiveSession);
        }

        let url = self.token_url(audience);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let minted: MintedToken = response
                    .json()
                    .await
                    .map_err(|e| SessionError::InvalidResponse(e.to_string()))?;
                if minted.jwt.is_empty() {
                    return Err(SessionError::InvalidResponse("empty jwt".into()));
                }
                debug!("Minted session token for audience {}", audience);
                Ok(minted.jwt)
            }
            StatusCode::NOT_FOUND => Err(SessionError::NoActiveSession),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(SessionError::token_fetch(format!(
                    "{} failed ({}): {}",
                    url, status, body
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> SessionConfig {
        SessionConfig {
            base_url: base_url.to_string(),
            secret_key: "sk_test".to_string(),
            timeout: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn test_mints_token_for_audience() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sessions/sess_1/tokens/store"))
            .and(header("authorization", "Bearer sk_test"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "jwt": "jwt-abc" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SessionClient::new(test_config(&server.uri()), "sess_1").unwrap();
        let token = client.bearer_token("store").await.unwrap();
        assert_eq!(token, "jwt-abc");
    }

    #[tokio::test]
    async fn test_empty_session_is_no_active_session() {
        let client = SessionClient::new(test_config("https://identity.example"), "").unwrap();
        let result = client.bearer_token("store").await;
        assert!(matches!(result, Err(SessionError::NoActiveSession)));
    }

    #[tokio::test]
    async fn test_expired_session_is_no_active_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("session not found"))
            .mount(&server)
            .await;

        let client = SessionClient::new(test_config(&server.uri()), "sess_gone").unwrap();
        let result = client.bearer_token("store").await;
        assert!(matches!(result, Err(SessionError::NoActiveSession)));
    }

    #[test]
    #[serial]
    fn test_config_requires_base_url() {
        std::env::remove_var("IDENTITY_BASE_URL");
        std::env::set_var("IDENTITY_SECRET_KEY", "sk");
        assert!(SessionConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_default_timeout() {
        std::env::set_var("IDENTITY_BASE_URL", "https://identity.example/");
        std::env::set_var("IDENTITY_SECRET_KEY", "sk");
        std::env::remove_var("IDENTITY_TIMEOUT_SECS");
        let config = SessionConfig::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, "https://identity.example");
    }
}
