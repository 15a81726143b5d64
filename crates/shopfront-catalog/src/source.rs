//! # Catalog Source Seam
//!
//! The trait the app layer depends on instead of the concrete HTTP client.
//! Screen-state tests implement it with in-memory doubles (fixed lists,
//! scripted failures) so the fetch-fail/retry scenarios run without network.

use async_trait::async_trait;

use crate::error::FetchResult;
use shopfront_core::Product;

/// Produces the full product list, or fails with a typed fetch error.
///
/// Implementations must be safe to call repeatedly: every refresh and every
/// manual retry re-invokes the same operation. There is no pagination and no
/// incremental variant; the catalog is always fetched whole.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieves the product sequence from the catalog.
    async fn fetch_products(&self) -> FetchResult<Vec<Product>>;
}
