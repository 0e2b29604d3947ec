//! Product catalog port trait

use async_trait::async_trait;

use crate::domain::entities::{ProductsRequest, ProductsResponse};
use crate::error::CatalogError;

/// Source of catalog pages
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_products(
        &self,
        request: &ProductsRequest,
    ) -> Result<ProductsResponse, CatalogError>;
}
