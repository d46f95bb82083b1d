use std::collections::HashMap;
use std::sync::Arc;

use super::{DomainEvent, EventHandler};

/// Registry of event handlers keyed by event type name.
///
/// Handlers for a given type run in registration order. Registering the same
/// handler twice is allowed; it then runs twice per notification.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the whole registry.
    pub fn event_handlers(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        &self.handlers
    }

    /// Returns the handlers registered for `event_type`, in registration order.
    pub fn handlers_for(&self, event_type: &str) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(event_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Appends `handler` to the list for `event_type`.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        tracing::debug!(%event_type, "registering event handler");
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Removes the first registration of `handler` for `event_type`.
    ///
    /// Handlers are compared by identity. Returns false if it was not registered.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) -> bool {
        let Some(list) = self.handlers.get_mut(event_type) else {
            return false;
        };
        match list.iter().position(|h| Arc::ptr_eq(h, handler)) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every handler for every event type.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Delivers `event` to every handler registered for its type.
    ///
    /// Does nothing if no handler is registered.
    pub fn notify(&self, event: &dyn DomainEvent) {
        let event_type = event.event_type();
        let handlers = self.handlers_for(event_type);
        if handlers.is_empty() {
            tracing::trace!(event_type, "no handlers registered");
            return;
        }

        tracing::debug!(event_type, handlers = handlers.len(), "dispatching domain event");
        for handler in handlers {
            handler.handle(event);
        }
        metrics::counter!("domain_events_dispatched", "event_type" => event_type).increment(1);
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .handlers
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .finish()
    }
}
