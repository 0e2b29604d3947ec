//! Product domain entity
//!
//! A validated catalog product. Products are only ever created through
//! [`Product::new`], which rejects records without an id, a name or a price.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Number of fractional digits kept on prices
pub const PRICE_SCALE: u32 = 2;

/// Unique identifier for a product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Average review score, always within `[MIN_RAW_VALUE, MAX_RAW_VALUE]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const MIN_RAW_VALUE: f64 = 0.0;
    pub const MAX_RAW_VALUE: f64 = 5.0;

    /// Out-of-range scores are clamped; NaN becomes the minimum.
    pub fn new(raw_value: f64) -> Self {
        if raw_value.is_nan() {
            return Self(Self::MIN_RAW_VALUE);
        }
        Self(raw_value.clamp(Self::MIN_RAW_VALUE, Self::MAX_RAW_VALUE))
    }

    pub fn raw_value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Rating {
    fn from(raw_value: f64) -> Self {
        Self::new(raw_value)
    }
}

impl From<u8> for Rating {
    fn from(raw_value: u8) -> Self {
        Self::new(f64::from(raw_value))
    }
}

/// Why a record could not become a [`Product`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidProduct {
    #[error("missing product id")]
    MissingId,

    #[error("missing product name")]
    MissingName,

    #[error("missing price")]
    MissingPrice,

    #[error("unparseable price: {0}")]
    UnparseablePrice(f64),
}

/// Parse a wire price into a two-digit decimal, truncating toward zero.
pub fn parse_price(value: f64) -> Result<Decimal, InvalidProduct> {
    if !value.is_finite() {
        return Err(InvalidProduct::UnparseablePrice(value));
    }

    let mut price = Decimal::from_str(&value.to_string())
        .map_err(|_| InvalidProduct::UnparseablePrice(value))?
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::ToZero);
    // rescale silently stops short of the target scale when the mantissa would overflow
    price.rescale(PRICE_SCALE);
    if price.scale() != PRICE_SCALE {
        return Err(InvalidProduct::UnparseablePrice(value));
    }
    Ok(price)
}

/// Data for constructing a product
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub detailed_description: Option<String>,
    pub image_url: Option<Url>,
    pub average_rating: Option<Rating>,
    pub review_count: Option<i64>,
    pub in_stock: Option<bool>,
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    detailed_description: String,
    image_url: Option<Url>,
    average_rating: Option<Rating>,
    review_count: i64,
    in_stock: bool,
}

impl Product {
    /// Validate and build a product, applying defaults for optional fields.
    pub fn new(new: NewProduct) -> Result<Self, InvalidProduct> {
        let id = new
            .id
            .filter(|id| !id.is_empty())
            .ok_or(InvalidProduct::MissingId)?;
        let name = new
            .name
            .filter(|name| !name.is_empty())
            .ok_or(InvalidProduct::MissingName)?;
        let price = parse_price(new.price.ok_or(InvalidProduct::MissingPrice)?)?;

        Ok(Self {
            id: ProductId(id),
            name,
            price,
            detailed_description: new.detailed_description.unwrap_or_default(),
            image_url: new.image_url,
            average_rating: new.average_rating,
            review_count: new.review_count.unwrap_or(0),
            in_stock: new.in_stock.unwrap_or(false),
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn detailed_description(&self) -> &str {
        &self.detailed_description
    }

    pub fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    pub fn average_rating(&self) -> Option<Rating> {
        self.average_rating
    }

    pub fn review_count(&self) -> i64 {
        self.review_count
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}
