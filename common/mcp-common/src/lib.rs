//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] for stderr logging
//! - **Results**: helpers for building `CallToolResult` responses
//! - **Errors**: helpers for MCP-compatible parameter errors
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Embedding MCPs
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use slack_webhook_mcp::{SlackWebhookMcpServer, WebhookConfig};
//!
//! let server = SlackWebhookMcpServer::new(WebhookConfig::from_env()?)?;
//! let result = server
//!     .call_tool("send_slack_message", serde_json::json!({ "message": "hi" }))
//!     .await?;
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, McpResult};
pub use init::init_tracing;
pub use result::{json_success, text_error, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
