//! Customer domain events.

use std::any::Any;

use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::event::DomainEvent;

use super::{Address, Customer};

/// A customer was registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    /// State of the customer when it was created.
    pub customer: Customer,

    /// When the customer was created.
    pub occurred_on: DateTime<Utc>,
}

impl CustomerCreatedEvent {
    pub const EVENT_TYPE: &'static str = "CustomerCreatedEvent";

    pub fn new(customer: &Customer) -> Self {
        Self {
            customer: customer.clone(),
            occurred_on: Utc::now(),
        }
    }
}

impl DomainEvent for CustomerCreatedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A customer's address was replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddressChangedEvent {
    pub customer_id: CustomerId,
    pub name: String,

    /// The new address.
    pub address: Address,

    pub occurred_on: DateTime<Utc>,
}

impl CustomerAddressChangedEvent {
    pub const EVENT_TYPE: &'static str = "CustomerAddressChangedEvent";

    pub fn new(customer: &Customer, address: Address) -> Self {
        Self {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
            address,
            occurred_on: Utc::now(),
        }
    }
}

impl DomainEvent for CustomerAddressChangedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let customer = Customer::new("1", "Customer 1").unwrap();
        let event = CustomerCreatedEvent::new(&customer);
        assert_eq!(event.event_type(), "CustomerCreatedEvent");
        assert_eq!(event.customer, customer);

        let address = Address::new("Street 1", 1, "Zip", "City").unwrap();
        let event = CustomerAddressChangedEvent::new(&customer, address.clone());
        assert_eq!(event.event_type(), "CustomerAddressChangedEvent");
        assert_eq!(event.customer_id.as_str(), "1");
        assert_eq!(event.address, address);
    }

    #[test]
    fn test_event_serialization() {
        let customer = Customer::new("1", "Customer 1").unwrap();
        let event = CustomerCreatedEvent::new(&customer);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Customer 1"));

        let deserialized: CustomerCreatedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }
}
