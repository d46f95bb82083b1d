//! Checkout aggregate: orders and their line items.

mod factory;
mod order;
mod order_item;
mod service;

pub use factory::{OrderFactory, OrderFactoryProps, OrderItemProps};
pub use order::Order;
pub use order_item::OrderItem;
pub use service::OrderService;

use thiserror::Error;

use crate::repository::Repository;

/// Persistence port for orders.
pub trait OrderRepository: Repository<Order> {}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Id is required")]
    IdRequired,

    #[error("CustomerId is required")]
    CustomerIdRequired,

    #[error("Items are required")]
    ItemsRequired,

    /// Item quantities must be positive.
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: String },

    #[error("Item already in order: {item_id}")]
    DuplicateItem { item_id: String },

    #[error("Order must have at least one item")]
    NoItemsToPlace,
}
