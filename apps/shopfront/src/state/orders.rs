//! # Orders State
//!
//! Read-only display state for the orders screen.
//!
//! No user path in this core creates orders (checkout is out of scope), so
//! the list stays empty unless the host application records one explicitly.
//! That incompleteness is deliberate and documented, not a bug to paper over.

use std::sync::Mutex;

use shopfront_core::Order;

/// Shared order list. Insertion order is display order.
#[derive(Debug, Default)]
pub struct OrdersState {
    orders: Mutex<Vec<Order>>,
}

impl OrdersState {
    /// Creates an empty orders state.
    pub fn new() -> Self {
        OrdersState {
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Records an order. Host-facing injection point; nothing inside the
    /// storefront calls this.
    pub fn record(&self, order: Order) {
        self.lock().push(order);
    }

    /// Snapshot of all orders.
    pub fn all(&self) -> Vec<Order> {
        self.lock().clone()
    }

    /// Number of recorded orders.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no orders have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        self.orders.lock().expect("Orders mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Money, OrderStatus};

    #[test]
    fn test_starts_empty() {
        let state = OrdersState::new();
        assert!(state.is_empty());
        assert!(state.all().is_empty());
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let state = OrdersState::new();
        state.record(Order::new(Money::from_cents(1000), OrderStatus::Pending));
        state.record(Order::new(Money::from_cents(2500), OrderStatus::Shipped));

        let orders = state.all();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].total_cents, 1000);
        assert_eq!(orders[1].total_cents, 2500);
        assert_eq!(orders[1].status, OrderStatus::Shipped);
    }
}
