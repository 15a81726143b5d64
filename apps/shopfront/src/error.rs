//! # Store Error Type
//!
//! Unified error type for the command surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Shopfront                             │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  store.add_to_cart(id, qty)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Storefront method                                               │  │
//! │  │  Result<T, StoreError>                                           │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart rule broken? ──── CoreError ─────────┐                    │  │
//! │  │         │                                  ▼                    │  │
//! │  │  Bad input? ─────────── ValidationError ── StoreError ─────────►│  │
//! │  │         │                                  ▲                    │  │
//! │  │  Client misconfigured? ─ FetchError ───────┘                    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  NOTE: A FAILED CATALOG FETCH IS NOT AN ERROR RETURN. It becomes       │
//! │  screen-local state (CatalogPhase::Failed + message) with a manual     │
//! │  retry; only configuration problems surface as StoreError.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_catalog::FetchError;
use shopfront_core::CoreError;

/// API error returned from Storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Catalog retrieval / client configuration failed
    FetchError,

    /// Anything else
    Internal,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        StoreError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts domain errors to store errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => StoreError::not_found("Product", id),
            CoreError::LineNotFound(id) => {
                StoreError::new(ErrorCode::CartError, format!("Product {id} not in cart"))
            }
            CoreError::CartTooLarge { max } => StoreError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {max} items"),
            ),
            CoreError::QuantityTooLarge { requested, max } => StoreError::new(
                ErrorCode::ValidationError,
                format!("Quantity {requested} exceeds maximum allowed ({max})"),
            ),
            CoreError::Validation(e) => StoreError::validation(e.to_string()),
        }
    }
}

/// Converts fetch errors to store errors.
///
/// Only reached for configuration problems (bad base URL); runtime fetch
/// failures are captured as catalog screen state instead.
impl From<FetchError> for StoreError {
    fn from(err: FetchError) -> Self {
        StoreError::new(ErrorCode::FetchError, err.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: StoreError = CoreError::LineNotFound(7).into();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Product 7 not in cart");

        let err: StoreError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_fetch_error_mapping() {
        let err: StoreError = FetchError::Status { status: 500 }.into();
        assert_eq!(err.code, ErrorCode::FetchError);
        assert!(err.message.contains("500"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = StoreError::not_found("Product", 42);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }
}
