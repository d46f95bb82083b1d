//! Domain layer for the checkout system.
//!
//! This crate provides the core domain model:
//! - Customer, Product and Order aggregates with their value objects
//! - Domain events and a synchronous [`EventDispatcher`]
//! - Repository ports implemented by the infrastructure layer
//! - Factories and domain services

pub mod checkout;
pub mod customer;
pub mod entity;
pub mod error;
pub mod event;
pub mod money;
pub mod product;
pub mod repository;

pub use checkout::{
    Order, OrderError, OrderFactory, OrderFactoryProps, OrderItem, OrderItemProps,
    OrderRepository, OrderService,
};
pub use common::{CustomerId, OrderId, OrderItemId, ProductId};
pub use customer::{
    Address, AddressError, Customer, CustomerAddressChangedEvent, CustomerCreatedEvent,
    CustomerError, CustomerFactory, CustomerRepository, LogWhenAddressIsChangedHandler,
    LogWhenCustomerIsCreatedFirstHandler, LogWhenCustomerIsCreatedSecondHandler,
};
pub use entity::Entity;
pub use error::DomainError;
pub use event::{DomainEvent, EventDispatcher, EventHandler};
pub use money::Money;
pub use product::{
    Product, ProductCreatedEvent, ProductError, ProductFactory, ProductRepository,
    ProductService, SendEmailWhenProductIsCreatedHandler,
};
pub use repository::{Repository, RepositoryError};
