use std::cell::RefCell;

use crate::event::{EngineEvent, EventHandler};

/// A simple event bus for broadcasting engine events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Emit an event to all registered handlers.
    ///
    /// Handlers must not emit on the same bus from inside `handle_event`.
    pub fn emit(&self, event: EngineEvent) {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::warn!("Dropping re-entrant event {event:?}");
            return;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}
