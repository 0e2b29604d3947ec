//! Mock implementations of port traits
//!
//! In-memory transport that can be configured for testing and records the
//! URLs it was asked for.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::Notify;
use url::Url;

use crate::domain::ports::{HttpResponse, HttpTransport, TransportOutcome};
use crate::error::TransportError;

// ============================================================================
// Mock Transport
// ============================================================================

#[derive(Clone, Default)]
pub struct MockTransport {
    outcome: Arc<RwLock<TransportOutcome>>,
    requested: Arc<RwLock<Vec<String>>>,
    /// When set, requests block until `release` is called
    gate: Option<Arc<Notify>>,
    started: Arc<Notify>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.with_outcome(TransportOutcome::response(HttpResponse::new(status, body)))
    }

    pub fn with_error(self, error: TransportError) -> Self {
        self.with_outcome(TransportOutcome::failed(error))
    }

    pub fn with_outcome(self, outcome: TransportOutcome) -> Self {
        *self.outcome.write().unwrap() = outcome;
        self
    }

    /// Hold every request in flight until `release` is called
    pub fn held(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Wait until a request has reached the transport
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn perform_request(&self, url: &Url) -> TransportOutcome {
        self.requested.write().unwrap().push(url.to_string());
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.outcome.read().unwrap().clone()
    }
}
