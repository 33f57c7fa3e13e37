use std::sync::Arc;

use async_trait::async_trait;
use ferrous_doh_application::ports::{
    DohResolver, HttpTransport, Logger, NoopLogger, TransportResponse,
};
use ferrous_doh_domain::{DnsResponse, DomainError, Query};
use tracing::debug;

use super::wire::{WireQuery, WireResponse};

/// Default resolver endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dns.google.com/resolve";

/// JSON DNS-over-HTTPS client.
///
/// Drives a [`HttpTransport`] and owns the response-envelope policy: a
/// non-200 status or a missing Content-Type header is an error, not
/// something to pass along. Logging goes through the injected capability
/// and is silent by default.
pub struct DohClient {
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
    logger: Arc<dyn Logger>,
}

impl DohClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport,
            logger: Arc::new(NoopLogger),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Issue the request and enforce the envelope rules shared by both
    /// resolution modes.
    async fn fetch(&self, query: &Query) -> Result<TransportResponse, DomainError> {
        let wire = WireQuery::from_query(query).with_defaults();
        let url = wire.to_url(&self.endpoint)?;

        self.logger.log(&format!("url: {url}"));
        debug!(url = %url, "sending resolver query");

        let response = self.transport.get(&url).await?;

        if response.status != 200 {
            self.logger
                .error(&format!("request failed: {}", response.status_text));
            return Err(DomainError::BadStatus(response.status_text));
        }

        if response.content_type.is_none() {
            return Err(DomainError::MissingContentType);
        }

        Ok(response)
    }
}

#[async_trait]
impl DohResolver for DohClient {
    async fn resolve(&self, query: &Query) -> Result<DnsResponse, DomainError> {
        let response = self.fetch(query).await?;

        let wire: WireResponse = serde_json::from_str(&response.body)
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))?;

        Ok(wire.into_response())
    }

    async fn resolve_raw(&self, query: &Query) -> Result<serde_json::Value, DomainError> {
        let response = self.fetch(query).await?;

        serde_json::from_str(&response.body)
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))
    }
}
