use async_trait::async_trait;
use ferrous_doh_domain::DomainError;

/// What an HTTP GET brought back.
///
/// Transports report what the server said and nothing more; status and
/// header policy belongs to the client driving them. The body is raw text:
/// decoding happens after the policy checks.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,

    /// Canonical reason phrase for the status, e.g. "Bad Request".
    pub status_text: String,

    /// Value of the Content-Type response header, if the server sent one.
    pub content_type: Option<String>,

    pub body: String,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, DomainError>;
}
