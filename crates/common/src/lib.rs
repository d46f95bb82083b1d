//! Shared types for the checkout workspace.

pub mod types;

pub use types::{CustomerId, OrderId, OrderItemId, ProductId};
