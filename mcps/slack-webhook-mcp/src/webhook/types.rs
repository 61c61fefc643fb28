//! Value types for a single webhook send

use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::SendError;

/// Prefix every Slack incoming webhook URL starts with
pub const SLACK_WEBHOOK_PREFIX: &str = "https://hooks.slack.com/services/";

/// Body Slack returns when a webhook post is accepted
pub const SLACK_OK_BODY: &str = "ok";

/// How Slack should interpret the message text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Plain text, no `mrkdwn` flag sent
    Text,
    /// Slack mrkdwn formatting
    #[default]
    Markdown,
}

/// A message to deliver through a webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    message: String,
    destination: Option<String>,
    format: MessageFormat,
}

impl SendRequest {
    /// Create a markdown request without a destination override
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            destination: None,
            format: MessageFormat::default(),
        }
    }

    /// Override the destination webhook URL.
    ///
    /// An empty string counts as no override.
    pub fn with_destination(mut self, destination: Option<String>) -> Self {
        self.destination = destination.filter(|url| !url.is_empty());
        self
    }

    pub fn with_format(mut self, format: MessageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn format(&self) -> MessageFormat {
        self.format
    }
}

/// JSON body posted to Slack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackPayload<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
}

impl<'a> SlackPayload<'a> {
    pub fn from_request(request: &'a SendRequest) -> Self {
        let mrkdwn = match request.format() {
            MessageFormat::Markdown => Some(true),
            MessageFormat::Text => None,
        };
        Self {
            text: request.message(),
            mrkdwn,
        }
    }
}

/// Outcome of one send.
///
/// A delivered result always carries a timestamp and never an error, a failed
/// one always carries an error and never a timestamp.
#[derive(Debug)]
pub enum SendResult {
    Delivered { timestamp: DateTime<Utc> },
    Failed(SendError),
}

impl SendResult {
    pub fn success(&self) -> bool {
        matches!(self, SendResult::Delivered { .. })
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            SendResult::Delivered { timestamp } => Some(*timestamp),
            SendResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SendError> {
        match self {
            SendResult::Delivered { .. } => None,
            SendResult::Failed(err) => Some(err),
        }
    }

    /// Timestamp as RFC 3339 with millisecond precision, e.g. `2024-05-01T12:00:00.123Z`
    pub fn timestamp_rfc3339(&self) -> Option<String> {
        self.timestamp()
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<SendError> for SendResult {
    fn from(err: SendError) -> Self {
        SendResult::Failed(err)
    }
}
