//! Credential provider trait.

use async_trait::async_trait;

use crate::error::SessionResult;

/// Capability for minting bearer credentials for the active session.
///
/// Passed explicitly to the request-lifecycle layer rather than read from
/// process-wide state, so tests and service contexts can substitute their
/// own implementation. Implementations are called once per operation and
/// must not be assumed to cache.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Mint a bearer token scoped to the given audience.
    async fn bearer_token(&self, audience: &str) -> SessionResult<String>;
}

/// Provider that always hands out one fixed token. Useful for service
/// credentials and tests.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self, _audience: &str) -> SessionResult<String> {
        Ok(self.token.clone())
    }
}
