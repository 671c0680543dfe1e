//! Executing requests and decoding the response envelope.

use crate::config::StorefrontConfig;
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use storefront_core::{GraphQlRequest, GraphQlResponse, Result};
use tracing::{debug, warn};

/// Client for one Storefront endpoint.
///
/// Cheap to clone; clones share the transport.
pub struct StorefrontClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for StorefrontClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl StorefrontClient<HttpTransport> {
    /// Client talking HTTPS to the configured shop
    pub fn connect(config: &StorefrontConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> StorefrontClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and decode the whole envelope.
    ///
    /// Response-level errors are returned inside the envelope, untouched.
    pub async fn execute<D: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
    ) -> Result<GraphQlResponse<D>> {
        let operation = request.operation_name.as_deref().unwrap_or("anonymous");
        debug!(operation, "sending storefront request");

        let body = self.transport.send(request).await?;
        let response: GraphQlResponse<D> = serde_json::from_str(&body)?;

        if response.has_errors() {
            for error in &response.errors {
                warn!(operation, message = %error.message, "storefront returned an error");
            }
        }
        Ok(response)
    }

    /// Send `request` and return its data.
    ///
    /// An error-only response becomes [`storefront_core::Error::GraphQl`].
    pub async fn query<D: DeserializeOwned>(&self, request: &GraphQlRequest) -> Result<D> {
        self.execute(request).await?.into_result()
    }
}
