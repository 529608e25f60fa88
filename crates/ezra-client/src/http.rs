// ============================================================================
// EZRA Client - HTTP Transport
// File: crates/ezra-client/src/http.rs
// ============================================================================
//! Thin wrapper around `reqwest` that attaches a fresh bearer token to every
//! request and maps response statuses onto [`ApiError`]. Body text of 404 and
//! 409 responses is surfaced verbatim; the backend writes user-facing
//! conflict messages and the UI layer must not reword them.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::TokenProvider;
use crate::error::ApiError;

pub(crate) struct Http {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl Http {
    pub(crate) fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        decode_json(response).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        response.bytes().await.map_err(ApiError::from)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        decode_json(response).await
    }

    /// POST without a request body, for path-parameter mutations such as
    /// send/terminate/cancel.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.post(self.url(path))).await?;
        decode_json(response).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let token = self.tokens.bearer_token().await?;
        let response = request.bearer_auth(token).send().await?;
        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), body = %body, "request rejected");
    match status.as_u16() {
        401 | 403 => Err(ApiError::Auth(non_empty(body, "unauthorized"))),
        404 => Err(ApiError::NotFound(non_empty(body, "not found"))),
        409 => Err(ApiError::Conflict(non_empty(body, "conflict"))),
        code => Err(ApiError::Server { status: code, message: non_empty(body, "server error") }),
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn non_empty(body: String, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
