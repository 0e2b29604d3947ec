//! Domain entities
//!
//! Validated, application-facing models. Wire shapes live with the
//! Supercenter adapter and are converted into these.

pub mod catalog_page;
pub mod product;

pub use catalog_page::{ProductsRequest, ProductsResponse};
pub use product::{parse_price, InvalidProduct, NewProduct, Product, ProductId, Rating};
