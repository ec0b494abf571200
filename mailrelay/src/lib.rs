//! Minimal EmailJS REST client.
//!
//! This crate provides a focused client for the EmailJS `email/send`
//! endpoint:
//! - Template parameter submission as JSON
//! - Optional private access token for strict-mode accounts
//! - Status and transport failures mapped to a single error type

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const API_BASE: &str = "https://api.emailjs.com/api/v1.0";

/// Errors that can occur when sending through EmailJS.
#[derive(Debug, Error)]
pub enum Error {
    #[error("EmailJS is not configured: missing {0}")]
    MissingConfig(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("EmailJS rejected the message (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Account identifiers for an EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub base_url: String,
}

impl RelayConfig {
    /// Create a config for the given service, template and public key.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            private_key: None,
            base_url: API_BASE.to_string(),
        }
    }

    /// Read the config from `EMAILJS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        let var = |name: &'static str| std::env::var(name).map_err(|_| Error::MissingConfig(name));

        let mut config = Self::new(
            var("EMAILJS_SERVICE_ID")?,
            var("EMAILJS_TEMPLATE_ID")?,
            var("EMAILJS_PUBLIC_KEY")?,
        );
        config.private_key = std::env::var("EMAILJS_PRIVATE_KEY").ok();
        Ok(config)
    }

    pub fn with_private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// Point the client at another endpoint (self-hosted relays, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// EmailJS API client.
#[derive(Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJs {
    /// Create a new client for the given account config.
    pub fn new(config: RelayConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Create a client from the `EMAILJS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(RelayConfig::from_env()?)
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Send the configured template with the given parameters.
    pub async fn send(&self, params: &TemplateParams) -> Result<(), Error> {
        let body = self.build_api_request(params);
        let url = format!("{}/email/send", self.config.base_url);
        debug!(%url, template = %self.config.template_id, "sending email template");

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status, %message, "EmailJS rejected the message");
            return Err(Error::Api { status, message });
        }

        Ok(())
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn build_api_request<'a>(&'a self, params: &'a TemplateParams) -> ApiRequest<'a> {
        ApiRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &params.values,
            access_token: self.config.private_key.as_deref(),
        }
    }
}

/// Template variables substituted into the EmailJS template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    values: BTreeMap<String, String>,
}

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}
