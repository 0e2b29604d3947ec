//! Supercenter products API client implementation

use async_trait::async_trait;
use url::Url;

use crate::adapters::http::ReqwestTransport;
use crate::config::CatalogConfig;
use crate::domain::entities::{ProductsRequest, ProductsResponse};
use crate::domain::ports::{HttpResponse, HttpTransport, ProductCatalog, TransportOutcome};
use crate::error::CatalogError;

use super::conversions::convert_products_response;
use super::wire::RawProductsResponse;

/// Catalog client for the Supercenter products API
pub struct SupercenterClient<T: HttpTransport> {
    transport: T,
    base_url: Url,
    image_base_url: Url,
}

impl SupercenterClient<ReqwestTransport> {
    /// Build a client with its own reqwest transport
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let transport =
            ReqwestTransport::new(config.request_timeout).map_err(CatalogError::Transport)?;

        Ok(Self::new(
            transport,
            config.base_url.clone(),
            config.image_base_url.clone(),
        ))
    }
}

impl<T: HttpTransport> SupercenterClient<T> {
    pub fn new(transport: T, base_url: Url, image_base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            image_base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn image_base_url(&self) -> &Url {
        &self.image_base_url
    }

    fn products_url(&self, request: &ProductsRequest) -> Result<Url, CatalogError> {
        self.base_url
            .join(&request.path())
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl<T: HttpTransport> ProductCatalog for SupercenterClient<T> {
    async fn get_products(
        &self,
        request: &ProductsRequest,
    ) -> Result<ProductsResponse, CatalogError> {
        let url = self.products_url(request)?;
        tracing::debug!("GET {}", url);

        let outcome = self.transport.perform_request(&url).await;
        let result = classify_outcome(outcome)
            .and_then(|response| decode_products(&response.body))
            .and_then(|raw| {
                if raw.total_products <= 0 {
                    return Err(CatalogError::NoProducts);
                }
                Ok(convert_products_response(raw, &self.image_base_url))
            });

        match &result {
            Ok(page) => tracing::info!(
                "Fetched {}: {} products ({} total)",
                url,
                page.products.len(),
                page.total_count
            ),
            Err(e) => tracing::warn!("Failed to fetch {}: {}", url, e),
        }

        result
    }
}

/// Classify a transport outcome before any decoding is attempted.
pub fn classify_outcome(outcome: TransportOutcome) -> Result<HttpResponse, CatalogError> {
    let TransportOutcome { response, error } = outcome;

    if let Some(error) = error.as_ref().filter(|e| e.is_connect()) {
        return Err(CatalogError::UnableToConnect(error.clone()));
    }

    let response = match response {
        Some(response) => response,
        None => return Err(error.map_or(CatalogError::Unknown, CatalogError::Transport)),
    };

    if !response.is_success() {
        return Err(CatalogError::BadResponseStatusCode(response.status));
    }

    Ok(response)
}

pub fn decode_products(body: &[u8]) -> Result<RawProductsResponse, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}
