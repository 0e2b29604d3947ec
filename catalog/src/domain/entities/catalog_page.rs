//! Catalog page request and response types

use serde::Serialize;

use super::product::Product;

/// A request for one page of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductsRequest {
    pub page: u32,
    pub page_size: u32,
}

impl ProductsRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Path of this page relative to the catalog base URL
    pub fn path(&self) -> String {
        format!("products/{}/{}", self.page, self.page_size)
    }
}

/// One page of validated products
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsResponse {
    /// Total number of products reported by the service, not the page length
    pub total_count: i64,
    /// Products in server order
    pub products: Vec<Product>,
}
