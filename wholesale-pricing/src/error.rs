//! Error types for upstream request validation
//!
//! The pricing engine itself never fails. These errors are only produced by
//! [`validate_request`](crate::validate_request), which callers may run before
//! pricing when they prefer a loud rejection over silent coercion.

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A field that must be non-negative is below zero
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// A field exceeds its allowed maximum
    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    AboveMaximum {
        field: &'static str,
        max: Decimal,
        value: Decimal,
    },

    /// Bulk discount is a percentage and must stay within [0, 100]
    #[error("bulk_discount_percent must be between 0 and 100, got {0}")]
    BulkPercentOutOfRange(Decimal),
}

/// Result type for validation operations
pub type PricingResult<T> = Result<T, PricingError>;
