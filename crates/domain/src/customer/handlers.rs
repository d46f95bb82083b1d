//! Logging handlers for customer events.

use crate::entity::Entity;
use crate::event::{DomainEvent, EventHandler};

use super::{CustomerAddressChangedEvent, CustomerCreatedEvent};

/// First log line written when a customer is created.
#[derive(Debug, Default)]
pub struct LogWhenCustomerIsCreatedFirstHandler;

impl EventHandler for LogWhenCustomerIsCreatedFirstHandler {
    fn handle(&self, event: &dyn DomainEvent) {
        if let Some(event) = event.downcast_ref::<CustomerCreatedEvent>() {
            tracing::info!(
                customer_id = %event.customer.id(),
                "first handler notified of CustomerCreatedEvent"
            );
        }
    }
}

/// Second log line written when a customer is created.
#[derive(Debug, Default)]
pub struct LogWhenCustomerIsCreatedSecondHandler;

impl EventHandler for LogWhenCustomerIsCreatedSecondHandler {
    fn handle(&self, event: &dyn DomainEvent) {
        if let Some(event) = event.downcast_ref::<CustomerCreatedEvent>() {
            tracing::info!(
                customer_id = %event.customer.id(),
                "second handler notified of CustomerCreatedEvent"
            );
        }
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Default)]
pub struct LogWhenAddressIsChangedHandler;

impl LogWhenAddressIsChangedHandler {
    pub(crate) fn message(event: &CustomerAddressChangedEvent) -> String {
        format!(
            "Customer address: {}, {} changed to: {}",
            event.customer_id, event.name, event.address
        )
    }
}

impl EventHandler for LogWhenAddressIsChangedHandler {
    fn handle(&self, event: &dyn DomainEvent) {
        if let Some(event) = event.downcast_ref::<CustomerAddressChangedEvent>() {
            tracing::info!("{}", Self::message(event));
        }
    }
}
