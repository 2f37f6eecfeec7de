//! Domain error model.

use thiserror::Error;

/// Result type used across the record stores.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// None of these are fatal: stores report them and leave state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record keyed by the given name or identifier does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A decrement would take a quantity below zero.
    #[error("insufficient quantity of {name} (requested {requested}, available {available})")]
    InsufficientQuantity {
        name: String,
        requested: u64,
        available: u64,
    },

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn insufficient(name: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            requested,
            available,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
