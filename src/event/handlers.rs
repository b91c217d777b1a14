use log::{debug, trace};

use crate::event::{EngineEvent, EventHandler};

/// Forwards every engine event to the `log` facade.
///
/// Transform updates arrive once per pointer move, so they go to `trace`.
#[derive(Debug, Default)]
pub struct LogEventHandler {
    source: String,
}

impl LogEventHandler {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::TransformChanged { .. } => trace!("{}: {event:?}", self.source),
            _ => debug!("{}: {event:?}", self.source),
        }
    }
}
