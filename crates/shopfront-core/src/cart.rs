//! # Cart & Aggregation
//!
//! Cart lines and the quantity × unit-price reduction to a total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Screen Action            Cart Operation          State Change          │
//! │  ─────────────            ──────────────          ────────────          │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► add_item() ──────────► lines.push / merge   │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► lines[i].qty = n     │
//! │                                                                         │
//! │  Tap Remove ─────────────► remove_line() ───────► lines.remove(i)      │
//! │                                                                         │
//! │  Tap Clear ──────────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  Cart Footer ────────────► total() ─────────────► Σ qty × unit price   │
//! │                                                                         │
//! │  All operations are pure and synchronous; thread safety is the app     │
//! │  layer's concern (CartState wraps this in a Mutex).                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart: a product reference plus a positive quantity.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog product
/// - title/price/image are frozen copies taken when the line was created, so
///   the cart keeps displaying consistent data even if the next catalog
///   refresh changes the product
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog product id this line refers to.
    pub product_id: i64,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Image reference at time of adding (frozen).
    pub image: String,

    /// Quantity in cart. Always >= 1; a zero update removes the line.
    pub quantity: i64,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a cart line from a product and quantity, freezing the price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            title: product.title.clone(),
            unit_price_cents: product.price_cents,
            image: product.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges)
/// - Quantity per line is in [1, MAX_LINE_QUANTITY]
/// - At most MAX_CART_LINES distinct lines
/// - Nothing here survives process restart; there is no persistence
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, merging quantities if already present.
    ///
    /// ## Errors
    /// - `Validation` if the quantity is not positive
    /// - `QuantityTooLarge` if the merged quantity would exceed the cap
    /// - `CartTooLarge` if a new line would exceed the line cap
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            let merged = line.quantity + quantity;
            if merged > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = merged;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of a line; a quantity of 0 removes it.
    ///
    /// ## Errors
    /// - `Validation` if the quantity is negative
    /// - `QuantityTooLarge` if it exceeds the cap
    /// - `LineNotFound` if the product is not in the cart
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_line(product_id);
        }
        validate_quantity(quantity)?;

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::LineNotFound(product_id)),
        }
    }

    /// Removes a line from the cart by product id.
    pub fn remove_line(&mut self, product_id: i64) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);

        if self.lines.len() == initial_len {
            Err(CoreError::LineNotFound(product_id))
        } else {
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The aggregator: Σ quantity × unit price over all lines.
    ///
    /// Returns `Money::zero()` for an empty cart. Prices and quantities are
    /// validated non-negative before they can enter a line, so the total
    /// cannot go negative; the debug assertion guards the invariant against
    /// future callers that bypass validation.
    pub fn total(&self) -> Money {
        let total = self
            .lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());
        debug_assert!(!total.is_negative(), "cart total must never be negative");
        total
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the cart footer and API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
    /// Total rendered to 2 decimal places, e.g. "$25.00".
    pub total_display: String,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_cents: total.cents(),
            total_display: total.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;
    use crate::MAX_LINE_QUANTITY;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price_cents,
            description: String::new(),
            category: "electronics".to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: 4.5,
                count: 7,
            },
        }
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(CartTotals::from(&cart).total_display, "$0.00");
    }

    #[test]
    fn test_total_is_sum_of_quantity_times_price() {
        // 2 × $10.00 + 1 × $5.00 = $25.00
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000), 2).unwrap();
        cart.add_item(&test_product(2, 500), 1).unwrap();

        assert_eq!(cart.total().cents(), 2500);
        assert_eq!(cart.total().to_string(), "$25.00");
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one distinct line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        assert!(matches!(
            cart.add_item(&product, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            cart.add_item(&product, -3),
            Err(CoreError::Validation(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_respects_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_item(&product, MAX_LINE_QUANTITY).unwrap();
        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.total_quantity(), MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000), 2).unwrap();

        cart.update_quantity(1, 5).unwrap();
        assert_eq!(cart.total_quantity(), 5);

        // Zero removes the line
        cart.update_quantity(1, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_product_errors() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.update_quantity(42, 1),
            Err(CoreError::LineNotFound(42))
        ));
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000), 1).unwrap();
        cart.add_item(&test_product(2, 500), 1).unwrap();

        cart.remove_line(1).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].product_id, 2);

        assert!(matches!(
            cart.remove_line(1),
            Err(CoreError::LineNotFound(1))
        ));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_line_freezes_price() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 1000);
        cart.add_item(&product, 1).unwrap();

        // A later catalog refresh changes the price; the line does not move
        product.price_cents = 9999;
        assert_eq!(cart.lines[0].unit_price_cents, 1000);
        assert_eq!(cart.total().cents(), 1000);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000), 2).unwrap();
        cart.add_item(&test_product(2, 500), 1).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_cents, 2500);
        assert_eq!(totals.total_display, "$25.00");
    }
}
