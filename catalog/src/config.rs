//! Catalog configuration
//!
//! Endpoint and timeout settings loaded from the environment.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:8080/";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base the `products/{page}/{pageSize}` path is resolved against
    pub base_url: Url,
    /// Base relative product image paths are resolved against
    pub image_base_url: Url,
    /// Resource timeout for each request, enforced by the transport
    pub request_timeout: Duration,
}

impl CatalogConfig {
    pub fn new(base_url: Url, image_base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            image_base_url: with_trailing_slash(image_base_url),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load from `SUPERCENTER_API_URL`, `SUPERCENTER_IMAGE_URL` and
    /// `SUPERCENTER_TIMEOUT_SECS`, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = var("SUPERCENTER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = parse_base_url("SUPERCENTER_API_URL", &api_url)?;

        let image_base_url = match var("SUPERCENTER_IMAGE_URL") {
            Some(value) => parse_base_url("SUPERCENTER_IMAGE_URL", &value)?,
            None => base_url.clone(),
        };

        let request_timeout = match var("SUPERCENTER_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "SUPERCENTER_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self::new(base_url, image_base_url).with_request_timeout(request_timeout))
    }
}

fn parse_base_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl { var, source })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase {
            var,
            value: value.to_string(),
        });
    }
    Ok(url)
}

/// Make relative paths resolve beneath the last path segment instead of replacing it
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
