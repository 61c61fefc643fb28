//! HTTP transport seam for webhook delivery
//!
//! The sender only needs "POST these JSON bytes, hand back status and body".
//! Keeping that behind [`WebhookTransport`] lets tests script responses and
//! count calls without a network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::error::TransportError;

/// Status and fully buffered body of a webhook response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one JSON POST
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Post `body` to `url` with `Content-Type: application/json`.
    ///
    /// The body must be read in full whatever the status. Any failure before
    /// a complete response is available is a [`TransportError`], whose text
    /// must not include `url`: webhook paths carry the token.
    async fn post_json(&self, url: &str, body: Vec<u8>)
        -> Result<TransportResponse, TransportError>;
}

/// [`WebhookTransport`] backed by a pooled `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        Ok(TransportResponse { status, body })
    }
}
