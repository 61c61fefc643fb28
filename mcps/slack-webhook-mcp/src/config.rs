//! Configuration for the Slack webhook MCP server

use std::time::Duration;

use thiserror::Error;

use crate::webhook::{TransportError, SLACK_WEBHOOK_PREFIX};

/// Environment variable holding the default webhook URL
pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "SLACK_WEBHOOK_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': expected a positive whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] TransportError),
}

/// Where the default destination comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultWebhookUrl {
    /// Read this environment variable on every call
    Env(String),
    /// Use a fixed value
    Fixed(Option<String>),
}

impl DefaultWebhookUrl {
    /// Current default URL. Unset and empty values both yield `None`.
    pub fn resolve(&self) -> Option<String> {
        let url = match self {
            DefaultWebhookUrl::Env(var) => std::env::var(var).ok(),
            DefaultWebhookUrl::Fixed(url) => url.clone(),
        };
        url.filter(|u| !u.is_empty())
    }
}

/// Configuration for the Slack webhook MCP server
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Default destination used when a call supplies no `webhook_url`
    pub default_url: DefaultWebhookUrl,
    /// Upper bound on one webhook request, connect through body read
    pub timeout: Duration,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            default_url: DefaultWebhookUrl::Env(WEBHOOK_URL_ENV.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WebhookConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Config with a fixed default URL instead of the environment
    pub fn with_default_url(mut self, url: Option<String>) -> Self {
        self.default_url = DefaultWebhookUrl::Fixed(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shorten a webhook URL so it can be shown without leaking its token path
pub fn redact_webhook_url(url: &str) -> String {
    if url.starts_with(SLACK_WEBHOOK_PREFIX) {
        return format!("{}…", SLACK_WEBHOOK_PREFIX);
    }

    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split('/').next().unwrap_or_default();
            format!("{}://{}/…", scheme, host)
        }
        None => "…".to_string(),
    }
}
