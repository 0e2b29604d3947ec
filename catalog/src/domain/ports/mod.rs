//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod catalog;
pub mod transport;

pub use catalog::ProductCatalog;
pub use transport::{HttpResponse, HttpTransport, TransportOutcome};
