//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: a failed command never leaves the
/// catalog or the ledger partially updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or duplicate input (e.g. empty name, SKU already in use).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced product or variant is no longer present.
    #[error("not found: {0}")]
    NotFound(String),

    /// A sale asked for more units than the variant has in stock.
    #[error("insufficient stock for {sku}: requested {requested}, available {available}")]
    InsufficientStock {
        sku: String,
        requested: i64,
        available: u32,
    },

    /// A sale quantity was zero or negative.
    #[error("invalid quantity: {0} (must be greater than zero)")]
    InvalidQuantity(i64),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn insufficient_stock(sku: impl Into<String>, requested: i64, available: u32) -> Self {
        Self::InsufficientStock {
            sku: sku.into(),
            requested,
            available,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
