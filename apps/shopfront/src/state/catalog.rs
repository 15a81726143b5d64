//! # Catalog Screen State
//!
//! The fetch/filter state behind the home screen.
//!
//! ## Phase Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Phase Machine                               │
//! │                                                                         │
//! │               refresh()                 fetch ok                        │
//! │   ┌──────┐ ─────────────► ┌─────────┐ ──────────► ┌───────┐            │
//! │   │ Idle │                │ Loading │             │ Ready │            │
//! │   └──────┘                └─────────┘ ◄────────── └───────┘            │
//! │                             │    ▲      refresh()                      │
//! │                    fetch err│    │ retry() / refresh()                 │
//! │                             ▼    │                                      │
//! │                           ┌────────┐                                    │
//! │                           │ Failed │  error message kept screen-local  │
//! │                           └────────┘                                    │
//! │                                                                         │
//! │  • refresh() while Loading is IGNORED (the refresh affordance is       │
//! │    disabled while a fetch is pending; at most one fetch in flight)     │
//! │  • No automatic retry, no backoff: retry is a user action              │
//! │  • A successful fetch replaces the product list wholesale and clears   │
//! │    the error                                                            │
//! │  • Query/category edits are synchronous and never wait on a fetch;     │
//! │    they filter whatever products are currently resident                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, warn};

use shopfront_catalog::CatalogSource;
use shopfront_core::{filter_products, CategoryFilter, Product};

/// Presentation phase of the catalog screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogPhase {
    /// No fetch attempted yet (before first mount).
    Idle,
    /// A fetch is in flight; the screen shows a loading state.
    Loading,
    /// Products are resident and displayable.
    Ready,
    /// The last fetch failed; the screen shows the error and a retry action.
    Failed,
}

#[derive(Debug)]
struct CatalogInner {
    phase: CatalogPhase,
    products: Vec<Product>,
    /// Human-readable message of the last failed fetch. `Some` iff Failed.
    error: Option<String>,
    query: String,
    category: CategoryFilter,
}

/// State store for the catalog screen.
///
/// Holds the fetched product list, the current search query and category
/// selection, and the fetch phase. All filtering is pure and recomputed on
/// demand; the store never caches a filtered view.
pub struct CatalogState {
    source: Arc<dyn CatalogSource>,
    inner: Mutex<CatalogInner>,
}

impl CatalogState {
    /// Creates a catalog state backed by the given source.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        CatalogState {
            source,
            inner: Mutex::new(CatalogInner {
                phase: CatalogPhase::Idle,
                products: Vec::new(),
                error: None,
                query: String::new(),
                category: CategoryFilter::All,
            }),
        }
    }

    /// Fetches the product list, driving the phase machine.
    ///
    /// Returns the phase the screen ends up in. If a fetch is already in
    /// flight the call is ignored and returns `Loading` immediately.
    pub async fn refresh(&self) -> CatalogPhase {
        {
            let mut inner = self.lock();
            if inner.phase == CatalogPhase::Loading {
                debug!("refresh ignored: fetch already in flight");
                return CatalogPhase::Loading;
            }
            inner.phase = CatalogPhase::Loading;
        }

        // The lock is NOT held across the await: query/category edits and
        // reads stay responsive while the fetch is pending.
        match self.source.fetch_products().await {
            Ok(products) => {
                let mut inner = self.lock();
                debug!(count = products.len(), "catalog refresh succeeded");
                inner.products = products;
                inner.error = None;
                inner.phase = CatalogPhase::Ready;
                CatalogPhase::Ready
            }
            Err(err) => {
                // Captured as screen state; never escalated further.
                warn!(error = %err, "catalog refresh failed");
                let mut inner = self.lock();
                inner.error = Some(err.to_string());
                inner.phase = CatalogPhase::Failed;
                CatalogPhase::Failed
            }
        }
    }

    /// Re-attempts the same fetch after a failure. Alias kept separate from
    /// [`refresh`](Self::refresh) because the UI affordances differ (pull to
    /// refresh vs an explicit retry button on the error view).
    pub async fn retry(&self) -> CatalogPhase {
        self.refresh().await
    }

    /// Current phase.
    pub fn phase(&self) -> CatalogPhase {
        self.lock().phase
    }

    /// Message of the last failed fetch, if the screen is in the error state.
    pub fn error_message(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Sets the search query. Takes effect on the next [`visible`](Self::visible) call.
    pub fn set_query(&self, query: impl Into<String>) {
        self.lock().query = query.into();
    }

    /// Sets the category selection.
    pub fn set_category(&self, category: CategoryFilter) {
        self.lock().category = category;
    }

    /// Current category selection.
    pub fn category(&self) -> CategoryFilter {
        self.lock().category.clone()
    }

    /// The filtered, order-preserving view of the resident product list.
    pub fn visible(&self) -> Vec<Product> {
        let inner = self.lock();
        filter_products(&inner.products, &inner.query, &inner.category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Looks up one resident product by id (detail screen).
    pub fn product(&self, id: i64) -> Option<Product> {
        self.lock()
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// Number of resident (unfiltered) products.
    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    /// Whether no products are resident.
    pub fn is_empty(&self) -> bool {
        self.lock().products.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CatalogInner> {
        self.inner.lock().expect("Catalog mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
