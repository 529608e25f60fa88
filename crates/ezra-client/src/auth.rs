// ============================================================================
// EZRA Client - Token Acquisition
// File: crates/ezra-client/src/auth.rs
// ============================================================================
//! Bearer-token acquisition seam.
//!
//! Tokens are short-lived and refreshed by the external auth collaborator;
//! the client asks the provider for a token on every call instead of caching
//! one itself.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::error::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// A currently-valid bearer token. Implementations own refresh-on-expiry.
    async fn bearer_token(&self) -> Result<String, ApiError>;
}

/// Fixed-token provider for service credentials and tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, ApiError> {
        Ok(self.token.clone())
    }
}

/// Linear-backoff wrapper for calls issued right after auth initialization,
/// when the underlying provider may not have minted a token yet. Attempt n
/// waits `backoff * n` before retrying.
pub struct RetryingTokenProvider<P> {
    inner: P,
    attempts: u32,
    backoff: Duration,
}

impl<P: TokenProvider> RetryingTokenProvider<P> {
    pub fn new(inner: P, attempts: u32, backoff: Duration) -> Self {
        Self { inner, attempts: attempts.max(1), backoff }
    }

    pub fn from_config(inner: P, config: &ezra_shared::config::AuthSettings) -> Self {
        Self::new(
            inner,
            config.token_retry_attempts,
            Duration::from_millis(config.token_retry_backoff_ms),
        )
    }
}

#[async_trait]
impl<P: TokenProvider> TokenProvider for RetryingTokenProvider<P> {
    async fn bearer_token(&self) -> Result<String, ApiError> {
        let mut last_err = None;
        for attempt in 1..=self.attempts {
            match self.inner.bearer_token().await {
                Ok(token) => return Ok(token),
                Err(err) => {
                    warn!("Token acquisition attempt {}/{} failed: {}", attempt, self.attempts, err);
                    last_err = Some(err);
                    if attempt < self.attempts {
                        tokio::time::sleep(self.backoff * attempt).await;
                    }
                }
            }
        }
        Err(last_err.unwrap_or_else(|| ApiError::Auth("token provider yielded no token".to_string())))
    }
}
