//! Domain error types.

use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::{AddressError, CustomerError};
use crate::product::ProductError;

/// Errors that can occur during domain operations.
///
/// Every variant is transparent so callers see the aggregate's own message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// An address failed validation.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// An error occurred in the customer aggregate.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// An error occurred in the product aggregate.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred in the order aggregate.
    #[error(transparent)]
    Order(#[from] OrderError),
}
