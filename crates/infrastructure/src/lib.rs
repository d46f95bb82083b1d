//! Persistence adapters for the checkout domain.
//!
//! Each repository maps entities to plain row records and back; nothing in
//! the domain crate knows about SQL.

pub mod customer;
pub mod db;
pub mod error;
pub mod order;
pub mod product;

pub use customer::{CustomerRecord, SqliteCustomerRepository};
pub use db::{DatabaseConfig, connect, connect_in_memory, run_migrations};
pub use error::{DatabaseError, Result};
pub use order::{OrderItemRecord, OrderRecord, SqliteOrderRepository};
pub use product::{ProductRecord, SqliteProductRepository};
