//! Checkout application layer.
//!
//! Wires the SQLite repositories and the domain event dispatcher into the use
//! cases exposed by [`CheckoutApp`].

pub mod checkout;
pub mod config;
pub mod error;

use std::sync::Arc;

use domain::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, EventDispatcher,
    LogWhenAddressIsChangedHandler, LogWhenCustomerIsCreatedFirstHandler,
    LogWhenCustomerIsCreatedSecondHandler, ProductCreatedEvent,
    SendEmailWhenProductIsCreatedHandler,
};
use infrastructure::{SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository};
use sqlx::SqlitePool;

pub use checkout::{CheckoutApp, OrderLine};
pub use config::{Config, LogFormat};
pub use error::{AppError, Result};

/// Checkout use cases backed by SQLite.
pub type SqliteCheckoutApp =
    CheckoutApp<SqliteCustomerRepository, SqliteProductRepository, SqliteOrderRepository>;

/// Creates a dispatcher with the built-in logging handlers registered.
pub fn default_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Arc::new(LogWhenCustomerIsCreatedFirstHandler),
    );
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Arc::new(LogWhenCustomerIsCreatedSecondHandler),
    );
    dispatcher.register(
        CustomerAddressChangedEvent::EVENT_TYPE,
        Arc::new(LogWhenAddressIsChangedHandler),
    );
    dispatcher.register(
        ProductCreatedEvent::EVENT_TYPE,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );
    dispatcher
}

/// Builds the SQLite-backed application over `pool`.
pub fn sqlite_app(pool: SqlitePool, dispatcher: EventDispatcher) -> SqliteCheckoutApp {
    CheckoutApp::new(
        SqliteCustomerRepository::new(pool.clone()),
        SqliteProductRepository::new(pool.clone()),
        SqliteOrderRepository::new(pool),
        dispatcher,
    )
}
