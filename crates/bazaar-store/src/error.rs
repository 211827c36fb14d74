//! # Store Error Type
//!
//! Unified error type for store operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bazaar                                 │
//! │                                                                         │
//! │  Frontend                    Store Layer                                │
//! │  ────────                    ───────────                                │
//! │                                                                         │
//! │  submit_payment()                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Checkout Flow                                                   │  │
//! │  │  Result<OrderReceipt, StoreError>                                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Balance short? ── CoreError::InsufficientBalance ──┐           │  │
//! │  │         │                                           ▼           │  │
//! │  │  Bad form input? ── ValidationError ──────────── StoreError ──► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "INSUFFICIENT_BALANCE",                                      │
//! │    "message": "موجودی کیف پول کافی نیست" }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing-id mutations (remove/update on an absent entry) are silent
//! no-ops in the stores themselves; `StoreError` covers the operations
//! that genuinely fail (checkout gating, form validation).

use serde::Serialize;

use bazaar_core::{CoreError, ValidationError};

/// Error returned from store operations.
///
/// ## Serialization
/// This is what the frontend receives when an operation fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_BALANCE",
///   "message": "موجودی کیف پول کافی نیست"
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

/// Error codes for store responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Business rule rejected the operation
    BusinessLogic,

    /// Wallet cannot cover the order total
    InsufficientBalance,

    /// Payment processing error
    PaymentError,

    /// Internal error
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

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a business-logic error.
    pub fn business(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::BusinessLogic, message)
    }

    /// Creates the insufficient-balance error with the localized message
    /// the checkout page shows.
    pub fn insufficient_balance() -> Self {
        StoreError::new(ErrorCode::InsufficientBalance, "موجودی کیف پول کافی نیست")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to store errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => StoreError::business("Cart is empty"),
            CoreError::InsufficientBalance { .. } => StoreError::insufficient_balance(),
            CoreError::Validation(e) => StoreError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to store errors.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::validation(err.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}
