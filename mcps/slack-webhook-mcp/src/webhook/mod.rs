//! Slack incoming webhook delivery
//!
//! Resolves the destination URL, checks it is a Slack webhook, posts the JSON
//! payload once and turns whatever happened into a [`SendResult`].

pub mod error;
pub mod sender;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{SendError, TransportError};
pub use sender::WebhookSender;
pub use transport::{ReqwestTransport, TransportResponse, WebhookTransport};
pub use types::{MessageFormat, SendRequest, SendResult, SlackPayload, SLACK_WEBHOOK_PREFIX};
