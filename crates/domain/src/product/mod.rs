//! Product aggregate and related types.

mod entity;
mod events;
mod factory;
mod handlers;
mod service;

pub use entity::Product;
pub use events::ProductCreatedEvent;
pub use factory::ProductFactory;
pub use handlers::SendEmailWhenProductIsCreatedHandler;
pub use service::ProductService;

use thiserror::Error;

use crate::repository::Repository;

/// Persistence port for products.
pub trait ProductRepository: Repository<Product> {}

/// Errors that can occur during product operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Price must be greater than zero")]
    InvalidPrice,
}
