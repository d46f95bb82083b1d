use crate::event::{DomainEvent, EventHandler};

use super::ProductCreatedEvent;

/// Notifies by email that a product was created.
///
/// Delivery is a log line carrying the event payload as JSON.
#[derive(Debug, Default)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) {
        let Some(event) = event.downcast_ref::<ProductCreatedEvent>() else {
            return;
        };
        match serde_json::to_string(&event.product) {
            Ok(payload) => {
                tracing::info!(%payload, "sending email: product created");
            }
            Err(error) => {
                tracing::warn!(%error, "could not serialize product for email");
            }
        }
    }
}
