//! Supercenter catalog CLI
//!
//! Fetches one page of the product catalog and prints it as JSON.
//!
//! Usage: `supercenter-catalog [page] [page-size]`
//!
//! Configuration comes from the environment (or `.env`):
//! - SUPERCENTER_API_URL: catalog base URL
//! - SUPERCENTER_IMAGE_URL: base for relative product image paths
//! - SUPERCENTER_TIMEOUT_SECS: per-request timeout

use anyhow::{Context, Result};
use supercenter_catalog::{CatalogConfig, CatalogService, ProductsRequest, SupercenterClient};
use tracing_subscriber::EnvFilter;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 20;

fn parse_arg(arg: Option<String>, name: &str, default: u32) -> Result<u32> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid {}: {}", name, value)),
        None => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so stdout only carries the JSON page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let page = parse_arg(args.next(), "page", DEFAULT_PAGE)?;
    let page_size = parse_arg(args.next(), "page size", DEFAULT_PAGE_SIZE)?;

    let config = CatalogConfig::from_env().context("Failed to load catalog configuration")?;
    tracing::info!("Using catalog at {}", config.base_url);

    let client = SupercenterClient::from_config(&config).context("Failed to build HTTP client")?;
    let service = CatalogService::new(client);

    let response = service
        .products(ProductsRequest::new(page, page_size))
        .await
        .with_context(|| format!("Failed to fetch page {} (size {})", page, page_size))?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
