//! Product domain events.

use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;

use super::Product;

/// A product was added to the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedEvent {
    /// State of the product when it was created.
    pub product: Product,

    pub occurred_on: DateTime<Utc>,
}

impl ProductCreatedEvent {
    pub const EVENT_TYPE: &'static str = "ProductCreatedEvent";

    pub fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            occurred_on: Utc::now(),
        }
    }
}

impl DomainEvent for ProductCreatedEvent {
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
