//! # Fetch Error Type
//!
//! The one error taxonomy of the fetch path.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FetchError Propagation                             │
//! │                                                                         │
//! │  CatalogClient::fetch_products()                                       │
//! │        │                                                                │
//! │        ├── connection refused / timeout ──► FetchError::Transport      │
//! │        ├── HTTP 404 / 500 / any non-2xx ──► FetchError::Status         │
//! │        ├── body is not the expected JSON ─► FetchError::Decode         │
//! │        └── record fails validation ───────► FetchError::Invalid        │
//! │                                                                         │
//! │  The app layer catches the error at the point of fetch, stores its     │
//! │  message as screen-local error state, and offers a manual retry.       │
//! │  Nothing is escalated to a central sink and nothing retries itself.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopfront_core::ValidationError;
use thiserror::Error;

/// Errors raised when catalog retrieval fails.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, TLS, timeout.
    #[error("Catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Catalog endpoint returned status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded as a product list.
    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    /// A fetched record failed validation (negative price, empty title,
    /// malformed image URL). Distinct from Decode: the JSON was well-formed
    /// but the data violates domain rules, and we fail fast rather than
    /// silently coerce.
    #[error("Catalog record {id} is invalid: {source}")]
    Invalid {
        /// Id of the offending record.
        id: i64,
        #[source]
        source: ValidationError,
    },

    /// The configured base URL could not be parsed or the client could not
    /// be constructed from it.
    #[error("Catalog client configuration invalid: {0}")]
    Config(String),
}

/// Convenience type alias for Results with FetchError.
pub type FetchResult<T> = Result<T, FetchError>;

// =============================================================================
// Unit Tests
// =============================================================================
