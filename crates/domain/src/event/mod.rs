//! Domain events and the in-process dispatcher.

mod dispatcher;

pub use dispatcher::EventDispatcher;

use std::any::Any;

use chrono::{DateTime, Utc};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Any + Send + Sync + std::fmt::Debug {
    /// Returns the event type name.
    ///
    /// Handlers are registered against this name.
    fn event_type(&self) -> &'static str;

    /// When the event happened.
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Returns the event as [`Any`] so handlers can recover the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl dyn DomainEvent {
    /// Returns the concrete event if it is of type `E`.
    pub fn downcast_ref<E: DomainEvent>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}

/// Reacts to a domain event.
///
/// Handlers are invoked synchronously by [`EventDispatcher::notify`].
pub trait EventHandler: Send + Sync {
    /// Handles a single event.
    fn handle(&self, event: &dyn DomainEvent);
}
