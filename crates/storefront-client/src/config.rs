//! Endpoint configuration.

use std::time::Duration;
use storefront_core::{Error, Result};
use storefront_queries::ArgumentStyle;
use url::Url;

/// Storefront API version used when none is configured
pub const DEFAULT_API_VERSION: &str = "2024-04";

/// Connection settings for the Storefront API
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Shop domain, e.g. `grantham-cakes.myshopify.com`
    pub shop_domain: String,
    /// API version segment of the endpoint path
    pub api_version: String,
    /// Public Storefront access token
    pub access_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// How operation parameters are sent
    pub argument_style: ArgumentStyle,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_domain: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
            argument_style: ArgumentStyle::Inline,
        }
    }
}

impl StorefrontConfig {
    /// Config for `shop_domain` with defaults elsewhere
    pub fn new<S: Into<String>>(shop_domain: S) -> Self {
        Self {
            shop_domain: shop_domain.into(),
            ..Default::default()
        }
    }

    /// Read settings from the environment.
    ///
    /// `STOREFRONT_SHOP_DOMAIN` is required. `STOREFRONT_API_VERSION`,
    /// `STOREFRONT_ACCESS_TOKEN` and `STOREFRONT_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let shop_domain = lookup("STOREFRONT_SHOP_DOMAIN")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::Config("STOREFRONT_SHOP_DOMAIN is not set".to_string()))?;

        let mut config = Self::new(shop_domain);
        if let Some(version) = lookup("STOREFRONT_API_VERSION") {
            config.api_version = version;
        }
        config.access_token = lookup("STOREFRONT_ACCESS_TOKEN");
        if let Some(secs) = lookup("STOREFRONT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::Config(format!("STOREFRONT_TIMEOUT_SECS is not a number: '{}'", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Set the access token
    pub fn with_access_token<S: Into<String>>(mut self, token: S) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the API version
    pub fn with_api_version<S: Into<String>>(mut self, version: S) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how parameters are sent
    pub fn with_argument_style(mut self, style: ArgumentStyle) -> Self {
        self.argument_style = style;
        self
    }

    /// `https://{shop_domain}/api/{api_version}/graphql.json`
    ///
    /// A domain given with a scheme keeps it, which lets tests point at a
    /// plain-HTTP server.
    pub fn endpoint(&self) -> Result<Url> {
        let domain = self.shop_domain.trim().trim_end_matches('/');
        if domain.is_empty() {
            return Err(Error::Config("shop domain is empty".to_string()));
        }
        let base = if domain.contains("://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };
        let url = format!("{}/api/{}/graphql.json", base, self.api_version);
        Url::parse(&url).map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", url, e)))
    }
}
