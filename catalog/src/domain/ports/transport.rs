//! HTTP transport port trait
//!
//! Defines the interface the catalog client uses to issue requests.

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What the transport produced for one request.
///
/// Either side may be missing: a transport can report an error alongside a
/// partial response, or (rarely) neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOutcome {
    pub response: Option<HttpResponse>,
    pub error: Option<TransportError>,
}

impl TransportOutcome {
    pub fn response(response: HttpResponse) -> Self {
        Self {
            response: Some(response),
            error: None,
        }
    }

    pub fn failed(error: TransportError) -> Self {
        Self {
            response: None,
            error: Some(error),
        }
    }
}

/// Transport for issuing GET requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`. Timeouts are the transport's own configuration.
    async fn perform_request(&self, url: &Url) -> TransportOutcome;
}
