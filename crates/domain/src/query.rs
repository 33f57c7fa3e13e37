use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dns_record::RecordType;

/// Content types the provider understands for the response payload.
///
/// Only the JSON path (`Javascript`) is implemented; requesting the binary
/// wire format is rejected before any network traffic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "application/x-javascript")]
    Javascript,
    #[serde(rename = "application/dns-message")]
    DnsMessage,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Javascript => "application/x-javascript",
            ContentType::DnsMessage => "application/dns-message",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application/x-javascript" => Ok(ContentType::Javascript),
            "application/dns-message" => Ok(ContentType::DnsMessage),
            _ => Err(format!("Unknown content type: {}", s)),
        }
    }
}

/// A fully-built resolver query.
///
/// Immutable once built; consumed by wire translation. Optional fields that
/// stay `None` are left to the wire layer's defaults merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub record_type: RecordType,
    pub disable_checking: Option<bool>,
    pub content_type: Option<ContentType>,
    pub dnssec: Option<bool>,
    pub edns_client_subnet: Option<String>,
    pub random_padding: Option<String>,
}

impl Query {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            disable_checking: None,
            content_type: None,
            dnssec: None,
            edns_client_subnet: None,
            random_padding: None,
        }
    }
}

/// Caller-tunable options for the query facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub disable_checking: Option<bool>,
    pub content_type: Option<ContentType>,
    pub dnssec: Option<bool>,
    pub edns_client_subnet: Option<String>,
    pub random_padding: Option<String>,
}

impl QueryOptions {
    /// Fill unset fields from the facade defaults.
    ///
    /// The subnet has no default: leaving it out means it is not sent.
    pub fn merged_with_defaults(self) -> Self {
        Self {
            disable_checking: self.disable_checking.or(Some(false)),
            content_type: self.content_type.or(Some(ContentType::Javascript)),
            dnssec: self.dnssec.or(Some(false)),
            edns_client_subnet: self.edns_client_subnet,
            random_padding: self.random_padding.or_else(|| Some(String::new())),
        }
    }
}
