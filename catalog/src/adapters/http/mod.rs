//! HTTP adapter
//!
//! `reqwest`-backed implementation of the transport port.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
