//! Slack Webhook MCP Library
//!
//! Posts text or markdown messages to Slack incoming webhooks.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use slack_webhook_mcp::{SlackWebhookMcpServer, WebhookConfig};
//!
//! let server = SlackWebhookMcpServer::new(WebhookConfig::from_env()?)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! The sender can also be used on its own:
//!
//! ```rust,ignore
//! use slack_webhook_mcp::webhook::{SendRequest, WebhookSender};
//!
//! let result = WebhookSender::default()
//!     .send(&SendRequest::new("Deploy finished"), Some(url))
//!     .await;
//! ```
//!
//! # Configuration
//! Set `SLACK_WEBHOOK_URL` for the default destination and optionally
//! `SLACK_WEBHOOK_TIMEOUT_SECS` (default 30).

pub mod config;
pub mod server;
pub mod webhook;

// Re-export main server type
pub use server::SlackWebhookMcpServer;

// Re-export parameter and config types for direct API usage
pub use config::{ConfigError, DefaultWebhookUrl, WebhookConfig};
pub use server::SendSlackMessageParams;
