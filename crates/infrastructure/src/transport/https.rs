//! HTTPS transport for the JSON resolver endpoint.
//!
//! Issues plain GET requests; the JSON API carries everything in the query
//! string. Response policy (status codes, headers) stays with the caller.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use ferrous_doh_application::ports::{HttpTransport, TransportResponse};
use ferrous_doh_domain::DomainError;
use tracing::debug;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// GET transport backed by the shared `reqwest` client.
pub struct ReqwestTransport {
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, DomainError> {
        let response = SHARED_CLIENT
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to read response body: {e}")))?;

        debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "response received"
        );

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            content_type,
            body,
        })
    }
}
