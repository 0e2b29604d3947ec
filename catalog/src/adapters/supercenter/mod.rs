//! Supercenter adapter
//!
//! Catalog client for the Supercenter products API, its wire model and the
//! wire → domain conversions.

pub mod client;
pub mod conversions;
pub mod wire;

pub use client::SupercenterClient;
pub use wire::{RawProduct, RawProductsResponse};
