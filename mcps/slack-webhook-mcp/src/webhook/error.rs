//! Error types for webhook delivery
//!
//! [`SendError`] is what a caller sees inside a failed
//! [`SendResult`](super::SendResult). [`TransportError`] is what a
//! [`WebhookTransport`](super::WebhookTransport) reports before the sender
//! classifies it.

use thiserror::Error;

/// Why a message was not delivered
#[derive(Error, Debug)]
pub enum SendError {
    /// Neither an override nor a configured default URL was available
    #[error(
        "No webhook URL provided. Please set SLACK_WEBHOOK_URL environment variable or provide webhook_url parameter."
    )]
    MissingDestination,

    /// The resolved URL is not a Slack incoming webhook
    #[error("Invalid webhook URL format. URL must start with https://hooks.slack.com/services/")]
    InvalidDestination,

    /// The HTTP exchange itself failed
    #[error("Network error: {0}")]
    Network(String),

    /// Slack answered with a non-2xx status
    #[error("Slack API error ({status}): {body}")]
    Remote {
        /// Numeric HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Slack answered 2xx but not with `ok`
    #[error("Unexpected response from Slack: {0}")]
    UnexpectedResponse(String),
}

/// Failures raised while performing the HTTP exchange
#[derive(Error, Debug)]
pub enum TransportError {
    /// Request, connection, timeout or body-read failure from reqwest
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Connection failure reported by a non-reqwest transport
    #[error("{0}")]
    Connection(String),
}

impl From<TransportError> for SendError {
    fn from(err: TransportError) -> Self {
        SendError::Network(err.to_string())
    }
}
