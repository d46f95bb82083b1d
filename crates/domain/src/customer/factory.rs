use common::CustomerId;

use super::{Address, Customer, CustomerError};

/// Builds customers with generated identifiers.
pub struct CustomerFactory;

impl CustomerFactory {
    /// Creates a customer without an address.
    pub fn create(name: impl Into<String>) -> Result<Customer, CustomerError> {
        Customer::new(CustomerId::generate(), name)
    }

    /// Creates a customer with the given address.
    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, CustomerError> {
        let mut customer = Self::create(name)?;
        customer.change_address(address);
        Ok(customer)
    }
}
