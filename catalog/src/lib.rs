//! Supercenter catalog client
//!
//! Fetches pages of the product catalog, decodes the loosely-typed wire format
//! and converts it into validated domain products.
//! Uses hexagonal (ports & adapters) architecture:
//! - `domain`: products, ratings and the port traits
//! - `adapters`: the reqwest transport and the Supercenter API client
//! - `app`: the request service with cancellable background fetches

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::{ReqwestTransport, SupercenterClient};
pub use app::{Cancellable, CatalogService};
pub use config::CatalogConfig;
pub use domain::entities::{Product, ProductId, ProductsRequest, ProductsResponse, Rating};
pub use domain::ports::{HttpResponse, HttpTransport, ProductCatalog, TransportOutcome};
pub use error::{CatalogError, ConfigError, TransportError, TransportErrorKind};
