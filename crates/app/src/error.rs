//! Application error type.

use domain::{DomainError, RepositoryError};
use infrastructure::DatabaseError;
use thiserror::Error;

/// Errors returned by the checkout use cases.
#[derive(Debug, Error)]
pub enum AppError {
    /// A business rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Loading or storing an aggregate failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The database could not be opened or migrated.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl AppError {
    /// Returns true if the error is a missing aggregate.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Repository(e) if e.is_not_found())
    }
}

/// Result type for use cases.
pub type Result<T> = std::result::Result<T, AppError>;
