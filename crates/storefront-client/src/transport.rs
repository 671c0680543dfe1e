//! Moving request bodies to the endpoint.

use crate::config::StorefrontConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use storefront_core::{Error, GraphQlRequest, Result};
use tracing::debug;
use url::Url;

/// Header carrying the public Storefront access token
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Sends one GraphQL request and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &GraphQlRequest) -> Result<String>;
}

/// HTTPS transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            endpoint,
            access_token: config.access_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &GraphQlRequest) -> Result<String> {
        let body = request.to_json()?;
        let mut builder = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);
        if let Some(ref token) = self.access_token {
            builder = builder.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

        debug!(status = status.as_u16(), bytes = text.len(), "storefront response");

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}
