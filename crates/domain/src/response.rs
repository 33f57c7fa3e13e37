use serde::{Deserialize, Serialize};

/// Resolver response in the library's public shape.
///
/// Serializes to the same JSON the original public API exposed
/// (`isTruncated`, `type`, `TTL`, ...). `answer` and `comment` stay absent
/// when the provider sent nothing, never `null` or empty placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsResponse {
    pub status: u16,

    #[serde(rename = "isTruncated")]
    pub is_truncated: bool,

    #[serde(rename = "isDNSSECValidated")]
    pub is_dnssec_validated: bool,

    #[serde(rename = "isCheckingDisabled")]
    pub is_checking_disabled: bool,

    pub question: Vec<Question>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<Vec<Answer>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One entry of the question section, with the type already symbolic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,
}

/// One answer record, with the type already symbolic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let response = DnsResponse {
            status: 0,
            is_truncated: false,
            is_dnssec_validated: false,
            is_checking_disabled: false,
            question: vec![Question {
                name: "example.com".to_string(),
                record_type: "A".to_string(),
            }],
            answer: None,
            comment: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("answer").is_none());
        assert!(json.get("comment").is_none());
        assert_eq!(json["question"][0]["type"], "A");
        assert_eq!(json["isTruncated"], false);
    }

    #[test]
    fn test_answer_serializes_with_public_names() {
        let answer = Answer {
            name: "example.com".to_string(),
            record_type: "MX".to_string(),
            ttl: Some(300),
            data: "10 mail.example.com.".to_string(),
        };

        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["type"], "MX");
        assert_eq!(json["TTL"], 300);
    }
}
