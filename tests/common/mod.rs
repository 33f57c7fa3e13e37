use std::sync::Arc;

use async_trait::async_trait;
use ferrous_doh_application::ports::{HttpTransport, TransportResponse};
use ferrous_doh_application::use_cases::QueryFacade;
use ferrous_doh_domain::{Answer, DomainError};
use ferrous_doh_infrastructure::doh::DohClient;

/// Transport stub that always answers with a canned response.
pub struct StubTransport {
    response: TransportResponse,
}

impl StubTransport {
    pub fn from_body(body: &str) -> Self {
        Self {
            response: TransportResponse {
                status: 200,
                status_text: "OK".to_string(),
                content_type: Some("application/x-javascript; charset=UTF-8".to_string()),
                body: body.to_string(),
            },
        }
    }

    pub fn with_status(status: u16, status_text: &str) -> Self {
        Self {
            response: TransportResponse {
                status,
                status_text: status_text.to_string(),
                content_type: Some("text/html".to_string()),
                body: String::new(),
            },
        }
    }

    pub fn without_content_type(body: &str) -> Self {
        Self {
            response: TransportResponse {
                status: 200,
                status_text: "OK".to_string(),
                content_type: None,
                body: body.to_string(),
            },
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, _url: &str) -> Result<TransportResponse, DomainError> {
        Ok(self.response.clone())
    }
}

/// Facade wired to a stub transport.
pub fn facade_over(transport: StubTransport) -> QueryFacade {
    let client = DohClient::new(Arc::new(transport));
    QueryFacade::new(Arc::new(client))
}

/// Order-normalize an answer list by its data field and drop the
/// time-varying TTLs, so fixture comparisons are stable.
pub fn normalized(mut answers: Vec<Answer>) -> Vec<Answer> {
    answers.sort_by(|a, b| a.data.cmp(&b.data));
    for answer in &mut answers {
        answer.ttl = None;
    }
    answers
}
