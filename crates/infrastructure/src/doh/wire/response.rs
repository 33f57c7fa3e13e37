//! Inbound wire translation for the `/resolve` endpoint.
//!
//! Inbound documents are trusted: nothing is re-validated here, and unknown
//! record-type codes pass through as-is.

use ferrous_doh_domain::{numeric_to_str, Answer, DnsResponse, Question, RecordType};
use serde::Deserialize;

/// Record type code as the provider emits it: usually a JSON number, but
/// tolerated as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeCode {
    Code(u16),
    Text(String),
}

impl TypeCode {
    /// Symbolic mnemonic, falling back to the raw code for unknown types.
    pub fn to_symbolic(&self) -> String {
        match self {
            TypeCode::Code(code) => match RecordType::from_code(*code) {
                Some(record_type) => record_type.as_str().to_string(),
                None => code.to_string(),
            },
            TypeCode::Text(text) => numeric_to_str(text),
        }
    }
}

/// Response document of the provider's `/resolve` endpoint.
///
/// Field names are provider-mandated.
#[derive(Debug, Clone, Deserialize)]
pub struct WireResponse {
    #[serde(rename = "Status")]
    pub status: u16,

    /// Truncated (TC) bit
    #[serde(rename = "TC")]
    pub truncated: bool,

    /// Recursion desired (RD) bit; always true for this provider
    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    /// Recursion available (RA) bit; always true for this provider
    #[serde(rename = "RA")]
    pub recursion_available: bool,

    /// Authenticated data (AD) bit: every record validated with DNSSEC
    #[serde(rename = "AD")]
    pub authenticated_data: bool,

    /// Checking disabled (CD) bit: the client asked to skip validation
    #[serde(rename = "CD")]
    pub checking_disabled: bool,

    #[serde(rename = "Question")]
    pub question: Vec<WireQuestion>,

    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<WireAnswer>>,

    #[serde(rename = "Comment", default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireQuestion {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: TypeCode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAnswer {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: TypeCode,

    #[serde(rename = "TTL", default)]
    pub ttl: Option<u32>,

    pub data: String,
}

impl WireResponse {
    /// Map into the public response shape.
    ///
    /// Renames the provider flags, translates type codes to mnemonics, and
    /// keeps `Answer`/`Comment` absent when the provider sent nothing.
    pub fn into_response(self) -> DnsResponse {
        DnsResponse {
            status: self.status,
            is_truncated: self.truncated,
            is_dnssec_validated: self.authenticated_data,
            is_checking_disabled: self.checking_disabled,
            question: self
                .question
                .into_iter()
                .map(|q| Question {
                    name: q.name,
                    record_type: q.record_type.to_symbolic(),
                })
                .collect(),
            answer: self.answer.map(|answers| {
                answers
                    .into_iter()
                    .map(|a| Answer {
                        name: a.name,
                        record_type: a.record_type.to_symbolic(),
                        ttl: a.ttl,
                        data: a.data,
                    })
                    .collect()
            }),
            comment: self.comment,
        }
    }
}
