use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::{Address, CustomerError};

/// Customer aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerFields")]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn entity_name() -> &'static str {
        "Customer"
    }
}

#[derive(Deserialize)]
struct CustomerFields {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
}

impl TryFrom<CustomerFields> for Customer {
    type Error = CustomerError;

    fn try_from(fields: CustomerFields) -> Result<Self, Self::Error> {
        let mut customer = Customer::new(fields.id, fields.name)?;
        customer.address = fields.address;
        if fields.active {
            customer.activate()?;
        }
        customer.reward_points = fields.reward_points;
        Ok(customer)
    }
}

impl Customer {
    /// Creates an inactive customer without an address.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    /// Renames the customer.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the customer's address.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer. Requires an address.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequiredToActivate);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credits reward points.
    pub fn add_reward_points(&mut self, points: i64) {
        self.reward_points += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap()
    }

    #[test]
    fn test_deserialize_keeps_invariants() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(address());
        customer.activate().unwrap();
        customer.add_reward_points(40);
        let json = serde_json::to_string(&customer).unwrap();
        assert_eq!(serde_json::from_str::<Customer>(&json).unwrap(), customer);

        let err = serde_json::from_str::<Customer>(
            r#"{"id":"1","name":"Customer 1","address":null,"active":true,"reward_points":0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Address is mandatory to activate a customer"));

        let err = serde_json::from_str::<Customer>(
            r#"{"id":"1","name":" ","address":null,"active":false,"reward_points":0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Name is required"));
    }

    #[test]
    fn test_new_customer_defaults() {
        let customer = Customer::new("123", "John").unwrap();
        assert_eq!(customer.id().as_str(), "123");
        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
        assert!(!customer.is_active());
        assert_eq!(customer.reward_points(), 0);
    }

    #[test]
    fn test_customer_validation() {
        let err = Customer::new("", "John").unwrap_err();
        assert_eq!(err.to_string(), "Id is required");

        let err = Customer::new("123", "").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_change_name() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");

        assert_eq!(customer.change_name(" "), Err(CustomerError::NameRequired));
        assert_eq!(customer.name(), "Jane");
    }

    #[test]
    fn test_activate_requires_address() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        let err = customer.activate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Address is mandatory to activate a customer"
        );

        customer.change_address(address());
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn test_add_reward_points() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.add_reward_points(10);
        customer.add_reward_points(10);
        assert_eq!(customer.reward_points(), 20);
    }
}
