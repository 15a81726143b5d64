//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (UUID)      │   │  All            │       │
//! │  │  title          │   │  date           │   │  Only(String)   │       │
//! │  │  price_cents    │   │  total_cents    │   └─────────────────┘       │
//! │  │  category       │   │  status         │                             │
//! │  │  image, rating  │   └─────────────────┘   ┌─────────────────┐       │
//! │  └─────────────────┘                         │   OrderStatus   │       │
//! │                                              │  ─────────────  │       │
//! │  Products come from the catalog endpoint     │  Pending        │       │
//! │  and are immutable once fetched; Orders      │  Shipped        │       │
//! │  are read-only display entities.             │  Delivered      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Customer rating summary for a product, as served by the catalog endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average rating (e.g., 3.9 out of 5).
    pub rate: f64,
    /// Number of ratings the average is based on.
    pub count: i64,
}

/// A catalog item available for browsing and purchase.
///
/// Products are owned by the screen that fetched them and are replaced
/// wholesale on the next refresh; nothing here is ever mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier assigned by the catalog.
    pub id: i64,

    /// Display title shown on the home grid and the detail screen.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Long-form description for the detail screen.
    pub description: String,

    /// Category as stored by the catalog (lower case, e.g. "men's clothing").
    /// Display labels may differ in case; comparisons must normalize.
    pub category: String,

    /// Image reference (URL), validated at the fetch boundary.
    pub image: String,

    /// Customer rating summary.
    pub rating: Rating,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The category selector on the home screen.
///
/// ## Matching Rules
/// - `All` is the sentinel that matches every product (the default)
/// - `Only(c)` matches when `c` equals the product's stored category after
///   lower-casing BOTH sides. Stored values differ in case from display
///   labels ("men's clothing" vs "Men's Clothing"); strict equality here
///   would silently empty the grid, which is a defect, not a feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum CategoryFilter {
    /// Matches every product.
    #[default]
    All,
    /// Matches products whose category equals this value, ignoring case.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a display label; the "All" label (any case)
    /// maps to the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Checks whether a product's stored category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => {
                selected.to_lowercase() == category.to_lowercase()
            }
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// The status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received, not yet shipped.
    Pending,
    /// Order handed to the carrier.
    Shipped,
    /// Order arrived.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A read-only order display entity for the orders screen.
///
/// ## Lifecycle Note
/// There is no checkout flow in this core, so no user path creates orders;
/// [`Order::new`] exists so a host application (or a test) can record one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the order was placed.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Order total in cents. Never negative: line prices and quantities are
    /// validated non-negative before they can reach an order.
    pub total_cents: i64,

    /// Fulfilment status.
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new order dated now.
    pub fn new(total: Money, status: OrderStatus) -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            total_cents: total.cents(),
            status,
        }
    }

    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_category_filter_from_label() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("ALL"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Electronics"),
            CategoryFilter::Only("Electronics".to_string())
        );
    }

    #[test]
    fn test_category_filter_matches_ignores_case() {
        let filter = CategoryFilter::Only("Men's Clothing".to_string());
        assert!(filter.matches("men's clothing"));
        assert!(filter.matches("MEN'S CLOTHING"));
        assert!(!filter.matches("women's clothing"));

        assert!(CategoryFilter::All.matches("anything at all"));
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_new_carries_total() {
        let order = Order::new(Money::from_cents(2500), OrderStatus::Pending);
        assert_eq!(order.total_cents, 2500);
        assert_eq!(order.total().to_string(), "$25.00");
        // UUID v4 string form
        assert_eq!(order.id.len(), 36);
    }

    #[test]
    fn test_product_price_accessor() {
        let product = Product {
            id: 1,
            title: "Backpack".to_string(),
            price_cents: 10995,
            description: String::new(),
            category: "men's clothing".to_string(),
            image: "https://example.com/1.jpg".to_string(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        };
        assert_eq!(product.price().to_string(), "$109.95");
    }
}
