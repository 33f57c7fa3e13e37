//! Outbound wire translation for the `/resolve` endpoint.
//!
//! Wire format (HTTP):
//! ```text
//! GET /resolve?name=example.com&type=MX&cd=false&ct=&do=false HTTP/2
//! ```
//!
//! Field names are provider-mandated; absent fields are omitted from the URL
//! entirely rather than sent empty.

use ferrous_doh_domain::{DomainError, Query, RecordType};
use serde::Serialize;

/// Query-string shape of the provider request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireQuery {
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Checking-disabled (CD) bit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cd: Option<bool>,

    /// Desired response content type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct: Option<String>,

    /// DNSSEC-OK (DO) bit
    #[serde(rename = "do", skip_serializing_if = "Option::is_none")]
    pub dnssec_ok: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub edns_client_subnet: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_padding: Option<String>,
}

impl WireQuery {
    /// Copy over the fields present on the query, renaming to the wire
    /// spelling. No defaulting happens here.
    pub fn from_query(query: &Query) -> Self {
        Self {
            name: query.name.clone(),
            record_type: Some(query.record_type.as_str().to_string()),
            cd: query.disable_checking,
            ct: query.content_type.map(|ct| ct.as_str().to_string()),
            dnssec_ok: query.dnssec,
            edns_client_subnet: query.edns_client_subnet.clone(),
            random_padding: query.random_padding.clone(),
        }
    }

    /// Fill any field still unset with the provider defaults.
    ///
    /// Re-applying the merge to an already-merged value changes nothing.
    pub fn with_defaults(mut self) -> Self {
        self.record_type
            .get_or_insert_with(|| RecordType::A.as_str().to_string());
        self.cd.get_or_insert(false);
        self.ct.get_or_insert_with(String::new);
        self.dnssec_ok.get_or_insert(false);
        self
    }

    /// Serialize into a full request URL under `base`.
    ///
    /// Booleans serialize to their string form (`true`/`false`).
    pub fn to_url(&self, base: &str) -> Result<String, DomainError> {
        let params = serde_urlencoded::to_string(self)
            .map_err(|e| DomainError::EncodeError(e.to_string()))?;
        Ok(format!("{base}?{params}"))
    }
}
