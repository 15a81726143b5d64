//! # shopfront-catalog: Catalog Endpoint Client
//!
//! The catalog fetch collaborator. One operation matters here: retrieve the
//! full product list from the remote catalog, or fail with a typed error.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   apps/shopfront ──────► CatalogSource (trait, this crate)             │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                          CatalogClient ──► GET {base_url}/products     │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                   wire records ──► validation ──► Vec<Product>         │
//! │                                                                         │
//! │   The app layer depends on the trait, never the concrete client, so    │
//! │   screen-state tests run against in-memory doubles with no network.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`client`] - `CatalogClient`, `CatalogConfig`, wire record decoding
//! - [`source`] - the `CatalogSource` seam
//! - [`error`] - `FetchError`

pub mod client;
pub mod error;
pub mod source;

pub use client::{CatalogClient, CatalogConfig, DEFAULT_CATALOG_URL};
pub use error::{FetchError, FetchResult};
pub use source::CatalogSource;
