//! Wire model for the Supercenter products API
//!
//! Mirrors the JSON exactly as received. Only the outer `products` array and
//! `totalProducts` are required; nothing is validated here.

use serde::Deserialize;

/// Body of `GET products/{page}/{pageSize}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductsResponse {
    pub products: Vec<Option<RawProduct>>,
    pub total_products: i64,
}

/// A single, untrusted product record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub short_description: Option<String>,
    pub price: Option<f64>,
    pub product_image: Option<String>,
    pub review_rating: Option<f64>,
    pub review_count: Option<i64>,
    pub in_stock: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_records_and_null_entries() {
        let json = r#"{
            "products": [
                null,
                {"productId": "1", "productName": "Widget", "price": 9.5, "inStock": true},
                {"productId": "2", "reviewRating": null}
            ],
            "totalProducts": 224
        }"#;

        let raw: RawProductsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(raw.total_products, 224);
        assert_eq!(raw.products.len(), 3);
        assert!(raw.products[0].is_none());

        let widget = raw.products[1].as_ref().unwrap();
        assert_eq!(widget.product_id.as_deref(), Some("1"));
        assert_eq!(widget.price, Some(9.5));
        assert_eq!(widget.in_stock, Some(true));
        assert!(widget.short_description.is_none());

        let sparse = raw.products[2].as_ref().unwrap();
        assert!(sparse.product_name.is_none());
        assert!(sparse.review_rating.is_none());
    }

    #[test]
    fn requires_outer_shape() {
        assert!(serde_json::from_str::<RawProductsResponse>(r#"{"products": []}"#).is_err());
        assert!(serde_json::from_str::<RawProductsResponse>(r#"{"totalProducts": 3}"#).is_err());
        assert!(serde_json::from_str::<RawProductsResponse>(
            r#"{"products": null, "totalProducts": 3}"#
        )
        .is_err());
    }
}
