use async_trait::async_trait;
use ferrous_doh_domain::{DnsResponse, DomainError, Query};

/// Resolves a built query against the upstream JSON endpoint.
#[async_trait]
pub trait DohResolver: Send + Sync {
    /// Resolve and translate into the public response shape.
    async fn resolve(&self, query: &Query) -> Result<DnsResponse, DomainError>;

    /// Resolve and hand back the provider's JSON document untouched.
    async fn resolve_raw(&self, query: &Query) -> Result<serde_json::Value, DomainError>;
}
