//! Slack Webhook MCP Server
//!
//! Posts messages to Slack incoming webhooks.
//!
//! # Configuration
//! Set `SLACK_WEBHOOK_URL` env var, or put it in a `.env` file in the
//! working directory.

use rmcp::{transport::io::stdio, ServiceExt};
use slack_webhook_mcp::{SlackWebhookMcpServer, WebhookConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    mcp_common::init_tracing("slack_webhook_mcp")?;

    tracing::info!("Starting Slack Webhook MCP server");

    let config = WebhookConfig::from_env()?;
    let server = SlackWebhookMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Slack Webhook MCP server running");

    service.waiting().await?;

    tracing::info!("Slack Webhook MCP server stopped");

    Ok(())
}
