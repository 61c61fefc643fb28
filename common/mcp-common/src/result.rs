//! Result helpers for MCP tool responses
//!
//! Tool failures the caller should read (a rejected webhook, a bad status)
//! are reported in-band with [`text_error`] rather than as protocol errors.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::error::{internal_error, McpResult};

/// Pretty-printed JSON response from any serializable data
///
/// # Arguments
///
/// * `data` - Any type that implements `Serialize`
///
/// # Returns
///
/// * `Ok(CallToolResult)` with one pretty-printed JSON text item
/// * `Err(McpError)` (internal error) if serialization fails
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::json_success;
///
/// #[derive(Serialize)]
/// struct WebhookStatus { configured: bool, timeout_secs: u64 }
///
/// async fn get_webhook_status(&self) -> Result<CallToolResult, McpError> {
///     json_success(&WebhookStatus { configured: true, timeout_secs: 30 })
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> McpResult<CallToolResult> {
    let json = serde_json::to_string_pretty(data).map_err(|e| internal_error(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Plain text response
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// Ok(text_success("Message sent successfully to Slack"))
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Plain text response flagged with `is_error`
///
/// The call itself succeeded at the protocol level; the host reads the text
/// to learn what went wrong.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_error;
///
/// match result {
///     SendResult::Failed(err) => Ok(text_error(format!("Failed to send message: {}", err))),
///     // ...
/// }
/// ```
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}
