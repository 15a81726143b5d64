//! # Shopfront Application Library
//!
//! Wires the state stores, the command surface, and logging together.
//!
//! ## Module Organization
//! ```text
//! shopfront_app/
//! ├── lib.rs          ◄─── You are here (setup & headless session)
//! ├── store.rs        ◄─── Storefront facade (the command surface)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Fetch phase machine + filter state
//! │   ├── cart.rs     ◄─── Cart state wrapper
//! │   ├── theme.rs    ◄─── Theme mode owner (watch channel)
//! │   └── orders.rs   ◄─── Order list state
//! └── error.rs        ◄─── StoreError for the command surface
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the catalog client from config (env overrides honored)
//! 3. Construct the Storefront (catalog, cart, theme, orders state)
//! 4. Run one headless browse/filter/cart/theme session and print the DTOs

pub mod error;
pub mod state;
pub mod store;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StoreError;
use shopfront_catalog::{CatalogClient, CatalogConfig};
use shopfront_core::ElementKind;
use state::CatalogPhase;
use store::Storefront;

/// Runs the headless demo session.
///
/// This is what a windowed shell would do on startup, minus the window:
/// fetch the catalog, exercise the filter, the cart, and the theme toggle,
/// and print each screen's DTOs as JSON.
pub async fn run() -> Result<(), StoreError> {
    init_tracing();

    let config = CatalogConfig::from_env();
    info!(base_url = %config.base_url, "starting shopfront headless session");

    let client = CatalogClient::new(config)?;
    let store = Storefront::new(Arc::new(client));

    // Home screen: initial fetch
    let view = store.refresh_catalog().await;
    match view.phase {
        CatalogPhase::Ready => {
            println!("── catalog ({} products) ──", view.products.len());
            for product in view.products.iter().take(5) {
                println!("  [{}] {} — {}", product.id, product.title, product.price_display);
            }
        }
        _ => {
            // Error view: message plus the manual-retry affordance. Headless,
            // so we just report and stop.
            println!(
                "── catalog unavailable: {} ──",
                view.error.unwrap_or_else(|| "unknown error".to_string())
            );
            return Ok(());
        }
    }

    // Search + category filter
    let hits = store.select_category("Electronics");
    println!("── electronics: {} products ──", hits.len());

    let hits = store.search("")?;
    if let Some(first) = hits.first() {
        // Detail screen + cart
        let details = store.product_details(first.id)?;
        println!("── details ──\n{}", serde_json::to_string_pretty(&details).unwrap_or_default());

        let cart = store.add_to_cart(first.id, 2)?;
        println!("── cart total: {} ──", cart.totals.total_display);
    }

    // Profile screen: theme toggle
    let mode = store.toggle_theme();
    let style = store.style(ElementKind::Container);
    println!("── theme: {mode:?}, container background {} ──", style.background);

    // Orders screen (empty: no checkout path exists)
    println!("── orders: {} ──", store.orders().len());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront=trace` - Show trace for shopfront crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
