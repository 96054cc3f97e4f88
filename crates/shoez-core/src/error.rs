//! # Error Types
//!
//! Domain-specific error types for shoez-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoez-core errors (this file)                                         │
//! │  ├── CoreError        - Checkout / voucher / cart failures             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shoez-db errors (separate crate)                                      │
//! │  └── DbError          - Local storage failures                         │
//! │                                                                         │
//! │  shoez-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - Remote product lookup failures                 │
//! │                                                                         │
//! │  Storefront API errors (in app)                                        │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery Policy
//! Every failure here is local. `InvalidVoucherCode` is retried by the user,
//! `MalformedPersistedCart` degrades to an empty cart, validation errors are
//! shown next to the offending form field.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The entered code matches neither the percentage nor the gift table.
    ///
    /// ## User Workflow
    /// ```text
    /// Enter "BADCODE" ──► apply_voucher()
    ///      │
    ///      ▼
    /// InvalidVoucherCode("BADCODE")
    ///      │
    ///      ▼
    /// UI shows: "Invalid voucher code. Please try again."
    /// Input stays enabled, total unchanged
    /// ```
    #[error("Invalid voucher code: {0}")]
    InvalidVoucherCode(String),

    /// A voucher was already applied in this checkout session.
    #[error("Voucher {applied} already applied to this checkout")]
    VoucherAlreadyApplied { applied: String },

    /// The persisted cart could not be decoded.
    ///
    /// Never surfaced to the shopper; the checkout mounts with an empty cart.
    #[error("Persisted cart is malformed: {0}")]
    MalformedPersistedCart(String),

    /// Applying a voucher would move the total outside the representable range.
    ///
    /// The running total is left unchanged.
    #[error("Voucher {code} would put the total out of range")]
    TotalOutOfRange { code: String },

    /// The cart backend failed for a reason other than malformed content.
    #[error("Cart storage unavailable: {0}")]
    CartStorage(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` text doubles as the message rendered under a form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric price, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field the error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
