//! Complete query flow: facade → translation → stubbed transport →
//! translation back to the public response shape.

use ferrous_doh_domain::{Answer, QueryOptions, RecordType};

#[path = "../common/mod.rs"]
mod common;
use common::{facade_over, normalized, StubTransport};

const MX_FIXTURE: &str = include_str!("../fixtures/query_mx.json");
const A_FIXTURE: &str = include_str!("../fixtures/query_a.json");

#[tokio::test]
async fn test_mx_query_yields_expected_answers() {
    let facade = facade_over(StubTransport::from_body(MX_FIXTURE));

    let response = facade.query_mx("example.com").await.unwrap();

    assert_eq!(response.status, 0);
    assert_eq!(response.question[0].record_type, "MX");

    let expected = vec![
        Answer {
            name: "example.com.".to_string(),
            record_type: "MX".to_string(),
            ttl: None,
            data: "10 mail.example.com.".to_string(),
        },
        Answer {
            name: "example.com.".to_string(),
            record_type: "MX".to_string(),
            ttl: None,
            data: "20 backup.example.com.".to_string(),
        },
    ];
    assert_eq!(normalized(response.answer.unwrap()), expected);
}

#[tokio::test]
async fn test_a_query_translates_flags_and_comment() {
    let facade = facade_over(StubTransport::from_body(A_FIXTURE));

    let response = facade.query_a("example.com").await.unwrap();

    assert!(response.is_dnssec_validated);
    assert!(!response.is_truncated);
    assert!(!response.is_checking_disabled);
    // This fixture has no Comment, and absence survives translation.
    assert_eq!(response.comment, None);

    let answers = normalized(response.answer.unwrap());
    assert_eq!(answers[0].record_type, "A");
    assert_eq!(answers[0].data, "93.184.215.14");
}

#[tokio::test]
async fn test_mx_comment_is_carried_over() {
    let facade = facade_over(StubTransport::from_body(MX_FIXTURE));

    let response = facade
        .query("example.com", RecordType::MX, QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(
        response.comment.as_deref(),
        Some("Response from 2001:4860:4802:32::a.")
    );
}

#[tokio::test]
async fn test_raw_mode_returns_the_provider_document() {
    let facade = facade_over(StubTransport::from_body(MX_FIXTURE));

    let document = facade
        .query_raw("example.com", RecordType::MX, QueryOptions::default())
        .await
        .unwrap();

    // Raw mode bypasses translation: provider field names remain.
    assert_eq!(document["Status"], 0);
    assert_eq!(document["Question"][0]["type"], 15);
    assert_eq!(document["Answer"][0]["TTL"], 14386);
}
