//! Error types for the catalog client
//!
//! This module defines error types for each layer:
//! - `TransportError`: failures reported by the HTTP transport
//! - `CatalogError`: everything a `get_products` call can surface to its caller
//! - `ConfigError`: problems loading the catalog configuration

use std::fmt;

use thiserror::Error;

/// Broad classification of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The target host could not be reached
    Connect,
    /// The transport gave up waiting for the resource
    Timeout,
    /// Anything else (protocol errors, body read failures, ...)
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Connect => write!(f, "connect"),
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Other => write!(f, "transport"),
        }
    }
}

/// Error reported by an `HttpTransport`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn connect(message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Connect,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Timeout,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Other,
            message: message.into(),
        }
    }

    pub fn is_connect(&self) -> bool {
        self.kind == TransportErrorKind::Connect
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            TransportError::connect(e.to_string())
        } else if e.is_timeout() {
            TransportError::timeout(e.to_string())
        } else {
            TransportError::other(e.to_string())
        }
    }
}

/// Errors surfaced by the product catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unable to connect: {0}")]
    UnableToConnect(TransportError),

    #[error("Request failed: {0}")]
    Transport(TransportError),

    #[error("Bad response status code: {0}")]
    BadResponseStatusCode(u16),

    #[error("No products")]
    NoProducts,

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Unknown error")]
    Unknown,
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decoding(e.to_string())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL in {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} cannot be used as a base URL: {value}")]
    NotABase { var: &'static str, value: String },

    #[error("Invalid number in {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}
