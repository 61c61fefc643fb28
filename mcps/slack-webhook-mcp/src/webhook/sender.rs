//! Webhook sender: resolve, validate, post, classify

use std::sync::Arc;

use chrono::Utc;

use crate::config::redact_webhook_url;

use super::error::SendError;
use super::transport::{ReqwestTransport, TransportResponse, WebhookTransport};
use super::types::{SendRequest, SendResult, SlackPayload, SLACK_OK_BODY, SLACK_WEBHOOK_PREFIX};

/// Delivers messages to Slack incoming webhooks.
///
/// Holds no mutable state, so one sender can serve any number of concurrent
/// calls. Cloning shares the underlying transport.
#[derive(Clone)]
pub struct WebhookSender {
    transport: Arc<dyn WebhookTransport>,
}

impl WebhookSender {
    pub fn new(transport: Arc<dyn WebhookTransport>) -> Self {
        Self { transport }
    }

    /// Send one message.
    ///
    /// `configured_default_url` is used when the request carries no
    /// destination override. Every failure comes back as
    /// [`SendResult::Failed`]; nothing is retried.
    pub async fn send(
        &self,
        request: &SendRequest,
        configured_default_url: Option<&str>,
    ) -> SendResult {
        match self.try_send(request, configured_default_url).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "Slack webhook send failed");
                SendResult::Failed(err)
            }
        }
    }

    async fn try_send(
        &self,
        request: &SendRequest,
        configured_default_url: Option<&str>,
    ) -> Result<SendResult, SendError> {
        let url = resolve_destination(request.destination(), configured_default_url)?;
        validate_destination(url)?;

        let payload = SlackPayload::from_request(request);
        let body = serde_json::to_vec(&payload).map_err(|e| SendError::Network(e.to_string()))?;

        tracing::debug!(
            destination = %redact_webhook_url(url),
            format = ?request.format(),
            message_len = request.message().len(),
            "Posting message to Slack webhook"
        );

        let response = self.transport.post_json(url, body).await?;
        classify_response(response)?;

        let timestamp = Utc::now();
        tracing::info!(%timestamp, "Message delivered to Slack");
        Ok(SendResult::Delivered { timestamp })
    }
}

impl Default for WebhookSender {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }
}

/// Override first, then the configured default. Empty strings count as unset.
fn resolve_destination<'a>(
    destination: Option<&'a str>,
    configured_default_url: Option<&'a str>,
) -> Result<&'a str, SendError> {
    destination
        .filter(|url| !url.is_empty())
        .or_else(|| configured_default_url.filter(|url| !url.is_empty()))
        .ok_or(SendError::MissingDestination)
}

fn validate_destination(url: &str) -> Result<(), SendError> {
    if url.starts_with(SLACK_WEBHOOK_PREFIX) {
        Ok(())
    } else {
        Err(SendError::InvalidDestination)
    }
}

fn classify_response(response: TransportResponse) -> Result<(), SendError> {
    if !response.is_success() {
        return Err(SendError::Remote {
            status: response.status,
            body: response.body,
        });
    }

    if response.body == SLACK_OK_BODY {
        Ok(())
    } else {
        Err(SendError::UnexpectedResponse(response.body))
    }
}
