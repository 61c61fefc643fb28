//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! subprocess or stdio transport in between.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameters did not deserialize into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The tool rejected the call with an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync`; hosts may issue concurrent tool
/// calls from several tasks.
///
/// Servers built with `#[tool_router]` list their tools through the router
/// and dispatch `call_tool` by name:
///
/// ```rust,ignore
/// #[async_trait]
/// impl EmbeddableMcp for SlackWebhookMcpServer {
///     fn server_name(&self) -> &str {
///         "slack-webhook"
///     }
///
///     fn list_tools(&self) -> Vec<Tool> {
///         self.tool_router.list_all()
///     }
///
///     async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
///         match name {
///             "send_slack_message" => {
///                 let params = serde_json::from_value(params)?;
///                 self.send_slack_message(Parameters(params)).await.map_err(Into::into)
///             }
///             _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All available tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name with a JSON object of parameters
    ///
    /// Fails with [`EmbeddableError::ToolNotFound`] for unknown names,
    /// [`EmbeddableError::SerdeError`] for malformed parameters and
    /// [`EmbeddableError::McpError`] when the tool itself rejects the call.
    /// Tool-level failures reported in-band come back as `Ok` with
    /// `is_error` set.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyServer;

    #[async_trait]
    impl EmbeddableMcp for EmptyServer {
        fn server_name(&self) -> &str {
            "empty"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, _params: Value) -> EmbeddableResult<CallToolResult> {
            Err(EmbeddableError::ToolNotFound(name.to_string()))
        }
    }

    #[test]
    fn test_defaults() {
        let server = EmptyServer;
        assert_eq!(server.server_name(), "empty");
        assert!(server.list_tools().is_empty());
        assert!(server.server_description().is_none());
        assert!(server.server_version().is_none());
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let server = EmptyServer;
        let result = server.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[test]
    fn test_mcp_error_conversion() {
        let err: EmbeddableError = crate::invalid_params("message cannot be empty").into();
        assert_eq!(err.to_string(), "mcp error: message cannot be empty");
    }
}
