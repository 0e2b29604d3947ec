//! Application layer
//!
//! Services that orchestrate the domain ports for callers.

pub mod catalog_service;

pub use catalog_service::{Cancellable, CatalogService};
