//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod supercenter;

pub use http::ReqwestTransport;
pub use supercenter::SupercenterClient;
