//! # Catalog Client
//!
//! The concrete HTTP client for the catalog endpoint, plus its configuration
//! and the wire-record decoding layer.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Fetch Flow                               │
//! │                                                                         │
//! │  Screen mounts / user taps refresh or retry                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fetch_products()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base_url}/products ──── non-2xx ──► FetchError::Status           │
//! │       │                  └─── transport ─► FetchError::Transport       │
//! │       ▼                                                                 │
//! │  Vec<ProductRecord> (serde) ── bad body ─► FetchError::Decode          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  per-record validation ────── bad data ──► FetchError::Invalid         │
//! │       │   • title non-empty        • price non-negative                │
//! │       │   • image parses as URL    • rating count non-negative         │
//! │       ▼                                                                 │
//! │  Vec<Product> (decimal price already converted to integer cents)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::source::CatalogSource;
use shopfront_core::validation::{
    validate_price_cents, validate_product_title, validate_rating_count,
};
use shopfront_core::{Money, Product, Rating};

/// The public catalog endpoint the storefront is built against.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Default per-request timeout. The screen shows a loading state while a
/// fetch is pending, so an unbounded wait would strand the user there.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Configuration
// =============================================================================

/// Catalog client configuration.
///
/// ## Environment Overrides
/// - `SHOPFRONT_CATALOG_URL` - base URL of the catalog endpoint
/// - `SHOPFRONT_HTTP_TIMEOUT_SECS` - per-request timeout in seconds
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; `/products` is joined onto this.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Creates a config for a specific base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Builds the config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SHOPFRONT_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let timeout = std::env::var("SHOPFRONT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        CatalogConfig { base_url, timeout }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new(DEFAULT_CATALOG_URL)
    }
}

// =============================================================================
// Wire Records
// =============================================================================

/// A product exactly as the endpoint serializes it.
///
/// ## Why a separate record type?
/// The wire format uses a decimal `price` and is outside our control; the
/// domain type uses integer cents. Decoding into a dedicated record keeps
/// the float-to-cents conversion (and all validation) in one place.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: RatingRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RatingRecord {
    pub rate: f64,
    pub count: i64,
}

impl ProductRecord {
    /// Validates the record and converts it into a domain Product.
    ///
    /// Fails fast on the first violated rule; a malformed record never
    /// reaches the product list.
    pub(crate) fn into_product(self) -> FetchResult<Product> {
        let id = self.id;
        let invalid = |source| FetchError::Invalid { id, source };

        validate_product_title(&self.title).map_err(invalid)?;

        let price = Money::from_decimal(self.price);
        validate_price_cents(price.cents()).map_err(invalid)?;
        validate_rating_count(self.rating.count).map_err(invalid)?;

        Url::parse(&self.image).map_err(|e| FetchError::Invalid {
            id,
            source: shopfront_core::ValidationError::InvalidFormat {
                field: "image".to_string(),
                reason: e.to_string(),
            },
        })?;

        Ok(Product {
            id,
            title: self.title,
            price_cents: price.cents(),
            description: self.description,
            category: self.category,
            image: self.image,
            rating: Rating {
                rate: self.rating.rate,
                count: self.rating.count,
            },
        })
    }
}

// =============================================================================
// Catalog Client
// =============================================================================

/// HTTP client for the catalog endpoint.
///
/// Cheap to clone is not a goal here; the app constructs one and shares it
/// behind the [`CatalogSource`] trait.
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Builds a client from configuration.
    ///
    /// ## Errors
    /// `FetchError::Config` when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn new(config: CatalogConfig) -> FetchResult<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::Config(format!("invalid base URL: {e}")))?;

        // Url::join replaces the last path segment of a slash-less path, so
        // a base of "https://example.com/api" would lose "/api". Normalize
        // to a trailing slash so joins always append.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(CatalogClient { http, base_url })
    }

    fn products_url(&self) -> FetchResult<Url> {
        self.base_url
            .join("products")
            .map_err(|e| FetchError::Config(format!("invalid products URL: {e}")))
    }

    /// Retrieves and validates the full product list.
    pub async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        let start = Instant::now();
        let endpoint = self.products_url()?;

        debug!(%endpoint, "fetching catalog");

        let response = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let records: Vec<ProductRecord> =
            response.json().await.map_err(FetchError::Decode)?;

        let products = records
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<FetchResult<Vec<Product>>>()?;

        let elapsed = start.elapsed();
        info!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            count = products.len(),
            "catalog fetch complete"
        );

        Ok(products)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        CatalogClient::fetch_products(self).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
