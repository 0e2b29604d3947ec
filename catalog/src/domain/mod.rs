//! Domain layer
//!
//! Contains pure catalog logic with no I/O.
//! - `entities`: validated product and page models
//! - `ports`: trait definitions for the transport and the catalog itself

pub mod entities;
pub mod ports;
