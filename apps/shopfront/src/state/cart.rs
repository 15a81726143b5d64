//! # Cart State
//!
//! Thread-safe wrapper around the pure [`Cart`] from shopfront-core.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. The async runtime may run commands on different threads
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them modify state. A RwLock would
//! add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use shopfront_core::Cart;

/// Shared cart state.
///
/// All cart rules (merge-on-add, quantity caps, line cap) live in the pure
/// [`Cart`]; this type only adds locking.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{CartTotals, Product, Rating};

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price_cents,
            description: String::new(),
            category: "electronics".to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: 4.0,
                count: 3,
            },
        }
    }

    #[test]
    fn test_state_wraps_pure_cart() {
        let state = CartState::new();

        state
            .with_cart_mut(|cart| cart.add_item(&test_product(1, 1000), 2))
            .unwrap();
        state
            .with_cart_mut(|cart| cart.add_item(&test_product(2, 500), 1))
            .unwrap();

        let totals = state.with_cart(|cart| CartTotals::from(cart));
        assert_eq!(totals.total_cents, 2500);
        assert_eq!(totals.total_display, "$25.00");
    }

    #[test]
    fn test_clear_through_state() {
        let state = CartState::new();
        state
            .with_cart_mut(|cart| cart.add_item(&test_product(1, 1000), 1))
            .unwrap();

        state.with_cart_mut(|cart| cart.clear());
        assert!(state.with_cart(|cart| cart.is_empty()));
    }
}
