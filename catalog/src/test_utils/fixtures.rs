//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use serde_json::json;
use url::Url;

use crate::adapters::supercenter::RawProduct;

/// Catalog base used by client tests
pub fn api_base() -> Url {
    Url::parse("https://api.example.com/v1/").unwrap()
}

/// Image base used by conversion tests
pub fn image_base() -> Url {
    Url::parse("https://img.example.com/").unwrap()
}

/// The smallest record that converts: id, name and price only
pub fn raw_widget() -> RawProduct {
    raw_product("1", "Widget", 9.999)
}

/// A minimal valid raw record
pub fn raw_product(id: &str, name: &str, price: f64) -> RawProduct {
    RawProduct {
        product_id: Some(id.to_string()),
        product_name: Some(name.to_string()),
        price: Some(price),
        ..Default::default()
    }
}

/// JSON body with `count` complete products and the given total
pub fn products_json(count: usize, total: i64) -> String {
    let products: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "productId": format!("id-{}", i),
                "productName": format!("Product {}", i),
                "shortDescription": format!("Description {}", i),
                "price": 10.0 + i as f64,
                "productImage": format!("/images/image{}.jpeg", i),
                "reviewRating": 4.0,
                "reviewCount": i,
                "inStock": i % 2 == 0,
            })
        })
        .collect();

    json!({ "products": products, "totalProducts": total }).to_string()
}
