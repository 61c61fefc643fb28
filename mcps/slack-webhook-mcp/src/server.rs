//! MCP Server implementation for Slack webhooks

use std::sync::Arc;

use mcp_common::{
    async_trait, invalid_params, json_success, text_error, text_success, EmbeddableError,
    EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{redact_webhook_url, ConfigError, DefaultWebhookUrl, WebhookConfig};
use crate::webhook::{
    MessageFormat, ReqwestTransport, SendRequest, SendResult, WebhookSender, WebhookTransport,
    SLACK_WEBHOOK_PREFIX,
};

/// The main Slack Webhook MCP Server
#[derive(Clone)]
pub struct SlackWebhookMcpServer {
    config: WebhookConfig,
    sender: WebhookSender,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SendSlackMessageParams {
    #[schemars(description = "The message text to send to Slack")]
    pub message: String,

    #[schemars(description = "Override the default webhook URL")]
    pub webhook_url: Option<String>,

    #[schemars(description = "Message format - \"text\" or \"markdown\"")]
    #[serde(default)]
    pub format: MessageFormat,
}

impl SendSlackMessageParams {
    fn into_request(self) -> Result<SendRequest, McpError> {
        if self.message.is_empty() {
            return Err(invalid_params("message cannot be empty"));
        }

        Ok(SendRequest::new(self.message)
            .with_destination(self.webhook_url)
            .with_format(self.format))
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WebhookStatus {
    pub configured: bool,
    pub valid_format: bool,
    pub source: String,
    pub url_preview: Option<String>,
    pub timeout_secs: u64,
}

fn render_send_result(result: &SendResult) -> CallToolResult {
    match result {
        SendResult::Delivered { .. } => {
            let text = match result.timestamp_rfc3339() {
                Some(ts) => format!("Message sent successfully to Slack at {}", ts),
                None => "Message sent successfully to Slack".to_string(),
            };
            text_success(text)
        }
        SendResult::Failed(err) => text_error(format!("Failed to send message: {}", err)),
    }
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SlackWebhookMcpServer {
    /// Build a server that posts through reqwest with the configured timeout
    pub fn new(config: WebhookConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::with_timeout(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: WebhookConfig, transport: Arc<dyn WebhookTransport>) -> Self {
        if config.default_url.resolve().is_none() {
            tracing::warn!(
                "No default webhook URL configured. Set SLACK_WEBHOOK_URL or pass webhook_url"
            );
        }

        Self {
            config,
            sender: WebhookSender::new(transport),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Send a message to Slack via incoming webhook. Uses SLACK_WEBHOOK_URL unless webhook_url is given."
    )]
    async fn send_slack_message(
        &self,
        Parameters(params): Parameters<SendSlackMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.into_request()?;
        let default_url = self.config.default_url.resolve();
        let sender = self.sender.clone();

        // A panic anywhere in the send path must not take the server down.
        let outcome =
            tokio::spawn(async move { sender.send(&request, default_url.as_deref()).await }).await;

        match outcome {
            Ok(result) => Ok(render_send_result(&result)),
            Err(err) => {
                tracing::error!(error = %err, "send_slack_message task failed");
                Ok(text_error(format!("Error: {}", err)))
            }
        }
    }

    #[tool(description = "Check whether a default Slack webhook URL is configured and well-formed.")]
    async fn get_webhook_status(&self) -> Result<CallToolResult, McpError> {
        let url = self.config.default_url.resolve();
        let source = match &self.config.default_url {
            DefaultWebhookUrl::Env(var) => format!("env:{}", var),
            DefaultWebhookUrl::Fixed(_) => "fixed".to_string(),
        };

        let status = WebhookStatus {
            configured: url.is_some(),
            valid_format: url
                .as_deref()
                .is_some_and(|u| u.starts_with(SLACK_WEBHOOK_PREFIX)),
            source,
            url_preview: url.as_deref().map(redact_webhook_url),
            timeout_secs: self.config.timeout.as_secs(),
        };

        json_success(&status)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SlackWebhookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Slack incoming webhook MCP server. Use send_slack_message to post text or \
                 markdown messages. Configure SLACK_WEBHOOK_URL or pass webhook_url per call."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SlackWebhookMcpServer {
    fn server_name(&self) -> &str {
        "slack-webhook"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Posts text or markdown messages to Slack incoming webhooks.")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "send_slack_message" => {
                let params: SendSlackMessageParams = serde_json::from_value(params)?;
                self.send_slack_message(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "get_webhook_status" => self.get_webhook_status().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
