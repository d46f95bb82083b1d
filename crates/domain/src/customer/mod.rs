//! Customer aggregate and related types.

mod address;
mod entity;
mod events;
mod factory;
mod handlers;

pub use address::Address;
pub use entity::Customer;
pub use events::{CustomerAddressChangedEvent, CustomerCreatedEvent};
pub use factory::CustomerFactory;
pub use handlers::{
    LogWhenAddressIsChangedHandler, LogWhenCustomerIsCreatedFirstHandler,
    LogWhenCustomerIsCreatedSecondHandler,
};

use thiserror::Error;

use crate::repository::Repository;

/// Persistence port for customers.
pub trait CustomerRepository: Repository<Customer> {}

/// Errors that can occur when building an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Street is required")]
    StreetRequired,

    #[error("Number is required")]
    NumberRequired,

    #[error("Zip is required")]
    ZipRequired,

    #[error("City is required")]
    CityRequired,
}

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Address is mandatory to activate a customer")]
    AddressRequiredToActivate,
}
