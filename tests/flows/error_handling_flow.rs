//! Error propagation through the full stack: every failure surfaces to the
//! caller, nothing is retried or swallowed.

use ferrous_doh_domain::{ContentType, DomainError, QueryOptions, RecordType};

#[path = "../common/mod.rs"]
mod common;
use common::{facade_over, StubTransport};

#[tokio::test]
async fn test_upstream_rejection_surfaces_status_text() {
    let facade = facade_over(StubTransport::with_status(400, "Bad Request"));

    let err = facade.query_a("example.com").await.unwrap_err();

    assert_eq!(err.to_string(), "failed with status: Bad Request");
    assert!(matches!(err, DomainError::BadStatus(_)));
}

#[tokio::test]
async fn test_missing_content_type_header_is_an_error() {
    let facade = facade_over(StubTransport::without_content_type("{}"));

    let err = facade.query_a("example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::MissingContentType));
}

#[tokio::test]
async fn test_binary_content_type_is_rejected_before_transport() {
    // The stub would happily answer; the facade must not get that far.
    let facade = facade_over(StubTransport::from_body("{}"));

    let options = QueryOptions {
        content_type: Some(ContentType::DnsMessage),
        ..QueryOptions::default()
    };
    let err = facade
        .query("example.com", RecordType::A, options)
        .await
        .unwrap_err();

    match err {
        DomainError::NotSupported(message) => {
            assert_eq!(message, "binary dns message not yet supported")
        }
        other => panic!("expected NotSupported, got {other:?}"),
    }
}
