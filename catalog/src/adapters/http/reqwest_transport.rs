//! reqwest transport implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::ports::{HttpResponse, HttpTransport, TransportOutcome};
use crate::error::TransportError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport backed by a dedicated `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn perform_request(&self, url: &Url) -> TransportOutcome {
        let response = match self.http.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("GET {} failed: {}", url, e);
                return TransportOutcome::failed(e.into());
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => TransportOutcome::response(HttpResponse::new(status, body.to_vec())),
            Err(e) => {
                // Keep the status so it is still classified before the body
                tracing::debug!("Failed to read body of GET {}: {}", url, e);
                TransportOutcome {
                    response: Some(HttpResponse::new(status, Vec::new())),
                    error: Some(e.into()),
                }
            }
        }
    }
}
