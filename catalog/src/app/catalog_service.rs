//! Catalog service
//!
//! Runs catalog requests on the Tokio runtime and hands back a handle that can
//! abort them. One service is built at startup and shared by reference; each
//! call owns its own request.

use std::sync::Arc;

use tokio::task::AbortHandle;

use crate::domain::entities::{ProductsRequest, ProductsResponse};
use crate::domain::ports::ProductCatalog;
use crate::error::CatalogError;

/// Handle to an in-flight catalog request
#[derive(Debug)]
pub struct Cancellable {
    handle: AbortHandle,
}

impl Cancellable {
    /// Abort the request. If it has not completed yet its completion is never called.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub struct CatalogService<C: ProductCatalog> {
    catalog: Arc<C>,
}

impl<C: ProductCatalog> Clone for CatalogService<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<C: ProductCatalog + 'static> CatalogService<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn with_shared(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Fetch one page. Dropping the returned future cancels the request.
    pub async fn products(
        &self,
        request: ProductsRequest,
    ) -> Result<ProductsResponse, CatalogError> {
        self.catalog.get_products(&request).await
    }

    /// Fetch one page in the background and call `completion` with the result.
    ///
    /// `completion` runs at most once, on a runtime worker. Dropping the
    /// returned handle does not cancel the request; call [`Cancellable::cancel`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn fetch_products<F>(&self, request: ProductsRequest, completion: F) -> Cancellable
    where
        F: FnOnce(Result<ProductsResponse, CatalogError>) + Send + 'static,
    {
        let catalog = Arc::clone(&self.catalog);
        let task = tokio::spawn(async move {
            let result = catalog.get_products(&request).await;
            completion(result);
        });

        Cancellable {
            handle: task.abort_handle(),
        }
    }
}
