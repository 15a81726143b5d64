//! # Storefront Facade
//!
//! The command surface the screens invoke, one method per user-visible
//! operation.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Commands                                 │
//! │                                                                         │
//! │  Screen               Command                      State Touched        │
//! │  ──────               ───────                      ─────────────        │
//! │  Home mount/refresh   refresh_catalog()            CatalogState        │
//! │  Search input         search(query)                CatalogState        │
//! │  Category chip        select_category(label)       CatalogState        │
//! │  Home grid            visible_products()           CatalogState        │
//! │  Detail view          product_details(id)          CatalogState        │
//! │  Add to cart          add_to_cart(id, qty)         Catalog + Cart      │
//! │  Quantity stepper     update_cart_quantity(id, n)  CartState           │
//! │  Remove line          remove_from_cart(id)         CartState           │
//! │  Clear cart           clear_cart()                 CartState           │
//! │  Cart screen          cart_view()                  CartState           │
//! │  Theme toggle         toggle_theme()               ThemeState          │
//! │  Any themed element   style(kind)                  ThemeState          │
//! │  Orders screen        orders()                     OrdersState         │
//! │                                                                         │
//! │  Every command logs structured fields and maps domain types to         │
//! │  camelCase DTOs; no domain type crosses this boundary raw.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::state::{CartState, CatalogPhase, CatalogState, OrdersState, ThemeState};
use shopfront_catalog::CatalogSource;
use shopfront_core::validation::validate_search_query;
use shopfront_core::{
    Cart, CartTotals, CategoryFilter, CoreError, ElementKind, Order, Product, Style, ThemeMode,
};

// =============================================================================
// DTOs
// =============================================================================

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples the domain model from the API contract
/// - Carries pre-rendered display strings so screens never do money math
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub price_cents: i64,
    /// Price rendered to 2 decimal places, e.g. "$109.95".
    pub price_display: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating_rate: f64,
    pub rating_count: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let price_display = p.price().to_string();
        ProductDto {
            id: p.id,
            title: p.title,
            price_cents: p.price_cents,
            price_display,
            description: p.description,
            category: p.category,
            image: p.image,
            rating_rate: p.rating.rate,
            rating_count: p.rating.count,
        }
    }
}

/// One cart line for the cart screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: i64,
    pub title: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
    pub image: String,
}

/// The whole cart screen: lines plus footer totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineDto>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            lines: cart
                .lines
                .iter()
                .map(|line| CartLineDto {
                    product_id: line.product_id,
                    title: line.title.clone(),
                    unit_price_cents: line.unit_price_cents,
                    quantity: line.quantity,
                    line_total_cents: line.line_total().cents(),
                    image: line.image.clone(),
                })
                .collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// One row for the orders screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    /// RFC 3339 timestamp.
    pub date: String,
    pub total_cents: i64,
    pub total_display: String,
    pub status: shopfront_core::OrderStatus,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        OrderDto {
            id: order.id.clone(),
            date: order.date.to_rfc3339(),
            total_cents: order.total_cents,
            total_display: order.total().to_string(),
            status: order.status,
        }
    }
}

/// The catalog screen view: phase, error message (if failed), and the
/// filtered product list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub phase: CatalogPhase,
    pub error: Option<String>,
    pub products: Vec<ProductDto>,
}

// =============================================================================
// Storefront
// =============================================================================

/// The application-root-scoped store.
///
/// One instance owns all shared state; screens receive a handle to it and
/// invoke commands. This is the explicit, injectable replacement for the
/// ambient globals a reactive UI layer would otherwise hide.
pub struct Storefront {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub theme: ThemeState,
    pub orders: OrdersState,
}

impl Storefront {
    /// Creates a storefront backed by the given catalog source.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Storefront {
            catalog: CatalogState::new(source),
            cart: CartState::new(),
            theme: ThemeState::new(),
            orders: OrdersState::new(),
        }
    }

    // ------------------------------------------------------------ catalog ----

    /// Fetches the catalog and returns the resulting screen view.
    ///
    /// A failed fetch is NOT an `Err`: it comes back as a `Failed` phase with
    /// the message, exactly what the error view renders.
    pub async fn refresh_catalog(&self) -> CatalogView {
        let start = Instant::now();
        debug!("refresh_catalog command");

        let phase = self.catalog.refresh().await;

        let view = self.catalog_view(phase);
        info!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            phase = ?phase,
            count = view.products.len(),
            "refresh_catalog complete"
        );
        view
    }

    /// Sets the search query and returns the re-filtered product list.
    ///
    /// Cheap enough to call on every keystroke; only over-long queries fail.
    pub fn search(&self, query: &str) -> Result<Vec<ProductDto>, StoreError> {
        let query = validate_search_query(query).map_err(CoreError::from)?;
        debug!(query = %query, "search command");

        self.catalog.set_query(query);
        Ok(self.visible_products())
    }

    /// Selects a category by its display label ("All" clears the filter).
    pub fn select_category(&self, label: &str) -> Vec<ProductDto> {
        let filter = CategoryFilter::from_label(label);
        debug!(category = ?filter, "select_category command");

        self.catalog.set_category(filter);
        self.visible_products()
    }

    /// The currently visible (filtered) products.
    pub fn visible_products(&self) -> Vec<ProductDto> {
        self.catalog
            .visible()
            .into_iter()
            .map(ProductDto::from)
            .collect()
    }

    /// Full product data for the detail screen.
    pub fn product_details(&self, id: i64) -> Result<ProductDto, StoreError> {
        debug!(id, "product_details command");
        self.catalog
            .product(id)
            .map(ProductDto::from)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    // --------------------------------------------------------------- cart ----

    /// Adds a product (by id) to the cart.
    pub fn add_to_cart(&self, product_id: i64, quantity: i64) -> Result<CartView, StoreError> {
        debug!(product_id, quantity, "add_to_cart command");

        let product = self
            .catalog
            .product(product_id)
            .ok_or_else(|| StoreError::not_found("Product", product_id))?;

        self.cart
            .with_cart_mut(|cart| cart.add_item(&product, quantity))?;

        let view = self.cart_view();
        info!(
            product_id,
            quantity,
            total_cents = view.totals.total_cents,
            "added to cart"
        );
        Ok(view)
    }

    /// Sets a line's quantity; 0 removes the line.
    pub fn update_cart_quantity(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<CartView, StoreError> {
        debug!(product_id, quantity, "update_cart_quantity command");
        self.cart
            .with_cart_mut(|cart| cart.update_quantity(product_id, quantity))?;
        Ok(self.cart_view())
    }

    /// Removes a line from the cart.
    pub fn remove_from_cart(&self, product_id: i64) -> Result<CartView, StoreError> {
        debug!(product_id, "remove_from_cart command");
        self.cart
            .with_cart_mut(|cart| cart.remove_line(product_id))?;
        Ok(self.cart_view())
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> CartView {
        debug!("clear_cart command");
        self.cart.with_cart_mut(|cart| cart.clear());
        self.cart_view()
    }

    /// Current cart screen view.
    pub fn cart_view(&self) -> CartView {
        self.cart.with_cart(|cart| CartView::from(cart))
    }

    // -------------------------------------------------------------- theme ----

    /// Flips the theme; every subscriber observes the new mode.
    pub fn toggle_theme(&self) -> ThemeMode {
        let mode = self.theme.toggle();
        info!(mode = ?mode, "theme toggled");
        mode
    }

    /// Current theme mode.
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Resolved style for an element kind under the current mode.
    pub fn style(&self, kind: ElementKind) -> Style {
        self.theme.style(kind)
    }

    // ------------------------------------------------------------- orders ----

    /// All recorded orders, display order.
    pub fn orders(&self) -> Vec<OrderDto> {
        self.orders.all().into_iter().map(OrderDto::from).collect()
    }

    /// Records an order. Host-facing; no storefront screen reaches this.
    pub fn record_order(&self, order: Order) {
        info!(order_id = %order.id, total_cents = order.total_cents, "order recorded");
        self.orders.record(order);
    }

    fn catalog_view(&self, phase: CatalogPhase) -> CatalogView {
        CatalogView {
            phase,
            error: self.catalog.error_message(),
            products: self.visible_products(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shopfront_catalog::{FetchError, FetchResult};
    use shopfront_core::{Money, OrderStatus, Rating};

    fn product(id: i64, title: &str, category: &str, price_cents: i64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price_cents,
            description: format!("{title} description"),
            category: category.to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: 4.2,
                count: 11,
            },
        }
    }

    struct FixedCatalog(Vec<Product>);

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenCatalog;

    #[async_trait]
    impl CatalogSource for BrokenCatalog {
        async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
            Err(FetchError::Status { status: 502 })
        }
    }

    fn store() -> Storefront {
        Storefront::new(Arc::new(FixedCatalog(vec![
            product(1, "Wireless Mouse", "electronics", 2599),
            product(2, "Casual Shirt", "men's clothing", 1550),
            product(3, "Gold Ring", "jewelery", 16800),
        ])))
    }

    #[tokio::test]
    async fn test_refresh_then_browse() {
        let store = store();
        let view = store.refresh_catalog().await;

        assert_eq!(view.phase, CatalogPhase::Ready);
        assert!(view.error.is_none());
        assert_eq!(view.products.len(), 3);
        assert_eq!(view.products[0].price_display, "$25.99");
    }

    #[tokio::test]
    async fn test_failed_refresh_yields_error_view() {
        let store = Storefront::new(Arc::new(BrokenCatalog));
        let view = store.refresh_catalog().await;

        assert_eq!(view.phase, CatalogPhase::Failed);
        assert!(view.error.unwrap().contains("502"));
        assert!(view.products.is_empty());
    }

    #[tokio::test]
    async fn test_search_and_category_commands() {
        let store = store();
        store.refresh_catalog().await;

        let hits = store.search("shirt").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        // Category narrows further; "All" restores
        store.search("").unwrap();
        let hits = store.select_category("Electronics");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = store.select_category("All");
        assert_eq!(hits.len(), 3);
    }

    #[tokio::test]
    async fn test_search_rejects_over_long_query() {
        let store = store();
        let err = store.search(&"x".repeat(500)).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_product_details() {
        let store = store();
        store.refresh_catalog().await;

        let dto = store.product_details(3).unwrap();
        assert_eq!(dto.title, "Gold Ring");
        assert_eq!(dto.price_display, "$168.00");

        let err = store.product_details(99).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let store = store();
        store.refresh_catalog().await;

        let view = store.add_to_cart(1, 2).unwrap();
        assert_eq!(view.totals.total_cents, 5198);

        let view = store.add_to_cart(2, 1).unwrap();
        assert_eq!(view.totals.total_cents, 6748);
        assert_eq!(view.lines.len(), 2);

        let view = store.update_cart_quantity(1, 1).unwrap();
        assert_eq!(view.totals.total_cents, 4149);

        let view = store.remove_from_cart(2).unwrap();
        assert_eq!(view.lines.len(), 1);

        let view = store.clear_cart();
        assert!(view.lines.is_empty());
        assert_eq!(view.totals.total_display, "$0.00");
    }

    #[tokio::test]
    async fn test_cart_view_renders_without_mutation() {
        let store = store();
        store.refresh_catalog().await;

        // Empty cart renders a zero footer
        let view = store.cart_view();
        assert!(view.lines.is_empty());
        assert_eq!(view.totals.total_display, "$0.00");

        store.add_to_cart(3, 1).unwrap();
        let view = store.cart_view();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.totals.total_cents, 16800);
    }

    #[tokio::test]
    async fn test_add_to_cart_requires_resident_product() {
        let store = store();
        // No refresh yet: nothing resident
        let err = store.add_to_cart(1, 1).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_theme_commands() {
        let store = store();
        assert_eq!(store.theme_mode(), ThemeMode::Light);

        assert_eq!(store.toggle_theme(), ThemeMode::Dark);
        assert_eq!(store.style(ElementKind::Container).background, "#2C2C2C");

        assert_eq!(store.toggle_theme(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_orders_commands() {
        let store = store();
        assert!(store.orders().is_empty());

        store.record_order(Order::new(Money::from_cents(2500), OrderStatus::Pending));
        let orders = store.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total_display, "$25.00");
    }
}
