//! Error helpers for MCP tool implementations

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Internal error, for failures that are not the caller's fault
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::internal_error;
///
/// let json = serde_json::to_string_pretty(&status).map_err(|e| internal_error(e.to_string()))?;
/// ```
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params error, for arguments that deserialized but are unusable
///
/// # Arguments
///
/// * `message` - Shown to the caller as the error message
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::invalid_params;
///
/// if params.message.is_empty() {
///     return Err(invalid_params("message cannot be empty"));
/// }
/// ```
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_internal_error() {
        let err = internal_error("serialization failed");
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("serialization failed"));
    }

    #[test]
    fn test_invalid_params() {
        let err = invalid_params("message cannot be empty");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("message cannot be empty"));
    }
}
