//! # State Module
//!
//! Application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: each state type has a single responsibility
//! 2. **Easier Testing**: individual states can be exercised in isolation
//! 3. **Reduced Contention**: independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                                 │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │  CartState   │ │  ThemeState  │ │ OrdersState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ fetch phase  │ │  Arc<Mutex<  │ │ watch::      │ │  Mutex<Vec<  │   │
//! │  │ products     │ │    Cart      │ │  Sender<     │ │    Order     │   │
//! │  │ query/filter │ │  >>          │ │  ThemeMode>  │ │  >>          │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • All shared state is single-writer in practice (the UI event loop);  │
//! │    the locks make that "last write wins" discipline safe anyway        │
//! │  • ThemeState uses a watch channel so EVERY consumer observes a mode   │
//! │    change simultaneously, without ambient global state                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod orders;
mod theme;

pub use cart::CartState;
pub use catalog::{CatalogPhase, CatalogState};
pub use orders::OrdersState;
pub use theme::ThemeState;
