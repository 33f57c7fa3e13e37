use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dns_record::RecordType;
use crate::errors::FieldError;
use crate::query::{ContentType, Query};

/// The untyped, boundary-facing request shape.
///
/// Field spelling matches the library's public API. The schema is closed:
/// unknown fields are rejected at deserialization, `name` and `type` are
/// required, everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(
        rename = "disableChecking",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub disable_checking: Option<bool>,

    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(rename = "DNSSEC", default, skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<bool>,

    #[serde(
        rename = "EDNSClientSubnet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub edns_client_subnet: Option<String>,

    #[serde(
        rename = "randomPadding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub random_padding: Option<String>,
}

impl QueryRequest {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.as_str().to_string(),
            disable_checking: None,
            content_type: None,
            dnssec: None,
            edns_client_subnet: None,
            random_padding: None,
        }
    }

    /// Deserialize from a JSON document.
    ///
    /// Shape violations (unknown fields, wrong primitive types, missing
    /// required fields) surface as a `FieldError` with an empty field name,
    /// since serde reports them against the whole document.
    pub fn from_json(value: serde_json::Value) -> Result<Self, FieldError> {
        serde_json::from_value(value).map_err(|e| FieldError::new("", e.to_string()))
    }

    /// Convert into the typed query.
    ///
    /// Meant to run after [`assert_valid_request`](crate::assert_valid_request);
    /// an unrecognized type or content type still comes back as the matching
    /// `FieldError` rather than a panic.
    pub fn into_query(self) -> Result<Query, FieldError> {
        let record_type = RecordType::ALL
            .iter()
            .find(|rt| rt.as_str() == self.record_type)
            .copied()
            .ok_or_else(|| {
                FieldError::new("type", "must be equal to one of the allowed values")
            })?;

        let content_type = match self.content_type.as_deref() {
            None => None,
            Some(raw) => Some(ContentType::from_str(raw).map_err(|_| {
                FieldError::new("contentType", "must be equal to one of the allowed values")
            })?),
        };

        Ok(Query {
            name: self.name,
            record_type,
            disable_checking: self.disable_checking,
            content_type,
            dnssec: self.dnssec,
            edns_client_subnet: self.edns_client_subnet,
            random_padding: self.random_padding,
        })
    }
}
