//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Every variant is
/// recoverable at the call boundary: the operation that raised it has left
/// the store untouched, and the caller resubmits corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (missing/invalid quantity, empty required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A Salida was attempted against an inactive product.
    #[error("product is inactive: {0}")]
    InactiveProduct(String),

    /// A name collided with an existing entry (case-insensitive).
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// A category still referenced by products cannot be removed.
    #[error("category in use: {0}")]
    CategoryInUse(String),

    /// A requested product/movement/category/role does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn inactive_product(msg: impl Into<String>) -> Self {
        Self::InactiveProduct(msg.into())
    }

    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        Self::DuplicateName(msg.into())
    }

    pub fn category_in_use(msg: impl Into<String>) -> Self {
        Self::CategoryInUse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
