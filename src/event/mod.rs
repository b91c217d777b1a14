//! Diagnostic hooks. Nothing in the engine depends on who listens.

mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{EngineEvent, GestureEndReason, GestureKind};
pub use handlers::LogEventHandler;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EngineEvent);
}
