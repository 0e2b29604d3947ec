//! Wire → domain conversion functions.

use url::Url;

use crate::domain::entities::{InvalidProduct, NewProduct, Product, ProductsResponse, Rating};

use super::wire::{RawProduct, RawProductsResponse};

/// Convert a decoded page, silently dropping null and invalid records.
pub fn convert_products_response(
    response: RawProductsResponse,
    image_base_url: &Url,
) -> ProductsResponse {
    ProductsResponse {
        total_count: response.total_products,
        products: response
            .products
            .into_iter()
            .flatten()
            .filter_map(|raw| match convert_product(raw, image_base_url) {
                Ok(product) => Some(product),
                Err(reason) => {
                    tracing::debug!("Dropping product record: {}", reason);
                    None
                }
            })
            .collect(),
    }
}

pub fn convert_product(raw: RawProduct, image_base_url: &Url) -> Result<Product, InvalidProduct> {
    Product::new(NewProduct {
        id: raw.product_id,
        name: raw.product_name,
        price: raw.price,
        detailed_description: raw.short_description,
        image_url: raw
            .product_image
            .as_deref()
            .and_then(|path| resolve_image_url(path, image_base_url)),
        average_rating: raw.review_rating.map(Rating::new),
        review_count: raw.review_count,
        in_stock: raw.in_stock,
    })
}

/// Resolve an image path against the image base. Absolute URLs pass through.
fn resolve_image_url(path: &str, image_base_url: &Url) -> Option<Url> {
    if path.is_empty() {
        return None;
    }
    image_base_url.join(path).ok()
}
