use std::sync::Arc;

use ferrous_doh_domain::{
    ContentType, DnsResponse, DomainError, Query, QueryOptions, RecordType,
};

use crate::ports::DohResolver;

/// Entry point for issuing queries.
///
/// Merges caller options over the fixed defaults and rejects the binary
/// wire-format content type before anything touches the network.
///
/// Requests are deliberately NOT validated here:
/// [`assert_valid_request`](ferrous_doh_domain::assert_valid_request) is a
/// separate pre-flight step for callers that want it, and a badly formed
/// name travels to the provider as-is.
pub struct QueryFacade {
    resolver: Arc<dyn DohResolver>,
}

impl QueryFacade {
    pub fn new(resolver: Arc<dyn DohResolver>) -> Self {
        Self { resolver }
    }

    pub async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        options: QueryOptions,
    ) -> Result<DnsResponse, DomainError> {
        let query = build_query(name, record_type, options)?;
        self.resolver.resolve(&query).await
    }

    /// Same as [`query`](Self::query), returning the provider JSON undecoded.
    pub async fn query_raw(
        &self,
        name: &str,
        record_type: RecordType,
        options: QueryOptions,
    ) -> Result<serde_json::Value, DomainError> {
        let query = build_query(name, record_type, options)?;
        self.resolver.resolve_raw(&query).await
    }

    pub async fn query_a(&self, name: &str) -> Result<DnsResponse, DomainError> {
        self.query(name, RecordType::A, QueryOptions::default()).await
    }

    pub async fn query_mx(&self, name: &str) -> Result<DnsResponse, DomainError> {
        self.query(name, RecordType::MX, QueryOptions::default()).await
    }

    pub async fn query_txt(&self, name: &str) -> Result<DnsResponse, DomainError> {
        self.query(name, RecordType::TXT, QueryOptions::default()).await
    }
}

fn build_query(
    name: &str,
    record_type: RecordType,
    options: QueryOptions,
) -> Result<Query, DomainError> {
    let options = options.merged_with_defaults();

    if options.content_type == Some(ContentType::DnsMessage) {
        return Err(DomainError::NotSupported(
            "binary dns message not yet supported".to_string(),
        ));
    }

    Ok(Query {
        name: name.to_string(),
        record_type,
        disable_checking: options.disable_checking,
        content_type: options.content_type,
        dnssec: options.dnssec,
        edns_client_subnet: options.edns_client_subnet,
        random_padding: options.random_padding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the queries it receives and returns a canned response.
    struct RecordingResolver {
        queries: Mutex<Vec<Query>>,
    }

    impl RecordingResolver {
        fn new() -> Self {
            Self {
                queries: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<Query> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DohResolver for RecordingResolver {
        async fn resolve(&self, query: &Query) -> Result<DnsResponse, DomainError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(DnsResponse {
                status: 0,
                is_truncated: false,
                is_dnssec_validated: false,
                is_checking_disabled: false,
                question: vec![],
                answer: None,
                comment: None,
            })
        }

        async fn resolve_raw(&self, query: &Query) -> Result<serde_json::Value, DomainError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(serde_json::json!({ "Status": 0 }))
        }
    }

    #[tokio::test]
    async fn test_query_merges_defaults() {
        let resolver = Arc::new(RecordingResolver::new());
        let facade = QueryFacade::new(resolver.clone());

        facade
            .query("example.com", RecordType::A, QueryOptions::default())
            .await
            .unwrap();

        let seen = resolver.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].disable_checking, Some(false));
        assert_eq!(seen[0].content_type, Some(ContentType::Javascript));
        assert_eq!(seen[0].dnssec, Some(false));
        assert_eq!(seen[0].edns_client_subnet, None);
        assert_eq!(seen[0].random_padding, Some(String::new()));
    }

    #[tokio::test]
    async fn test_caller_options_survive_the_merge() {
        let resolver = Arc::new(RecordingResolver::new());
        let facade = QueryFacade::new(resolver.clone());

        let options = QueryOptions {
            dnssec: Some(true),
            edns_client_subnet: Some("192.0.2.0/24".to_string()),
            ..QueryOptions::default()
        };
        facade
            .query("example.com", RecordType::AAAA, options)
            .await
            .unwrap();

        let seen = resolver.seen();
        assert_eq!(seen[0].record_type, RecordType::AAAA);
        assert_eq!(seen[0].dnssec, Some(true));
        assert_eq!(seen[0].edns_client_subnet.as_deref(), Some("192.0.2.0/24"));
    }

    #[tokio::test]
    async fn test_binary_content_type_short_circuits() {
        let resolver = Arc::new(RecordingResolver::new());
        let facade = QueryFacade::new(resolver.clone());

        let options = QueryOptions {
            content_type: Some(ContentType::DnsMessage),
            ..QueryOptions::default()
        };
        let err = facade
            .query("example.com", RecordType::A, options)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotSupported(_)));
        assert!(resolver.seen().is_empty(), "must fail before the resolver runs");
    }

    #[tokio::test]
    async fn test_facade_does_not_validate_names() {
        // Validation is opt-in; a malformed name is passed through untouched.
        let resolver = Arc::new(RecordingResolver::new());
        let facade = QueryFacade::new(resolver.clone());

        facade
            .query("not a hostname", RecordType::A, QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(resolver.seen()[0].name, "not a hostname");
    }

    #[tokio::test]
    async fn test_convenience_wrappers_prefill_type() {
        let resolver = Arc::new(RecordingResolver::new());
        let facade = QueryFacade::new(resolver.clone());

        facade.query_a("example.com").await.unwrap();
        facade.query_mx("example.com").await.unwrap();
        facade.query_txt("example.com").await.unwrap();

        let types: Vec<RecordType> = resolver.seen().iter().map(|q| q.record_type).collect();
        assert_eq!(types, vec![RecordType::A, RecordType::MX, RecordType::TXT]);
    }
}
