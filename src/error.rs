use thiserror::Error;

use crate::id::ObjectId;

/// Errors raised when the gesture machine refuses a transition.
///
/// None of these reach the user: the router logs them and drops the event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    /// Attempted to transition between incompatible session modes
    #[error("cannot transition from {from} to {to}")]
    InvalidStateTransition {
        from: &'static str,
        to: &'static str,
    },
    /// The event named an object the surface does not know about
    #[error("object {0} is not present on this surface")]
    UnknownObject(ObjectId),
    /// Resize handles only exist on the selected object
    #[error("object {0} is not selected, its handles are not grabbable")]
    NotSelected(ObjectId),
    /// A move or release arrived without a live contact session
    #[error("no contact is being tracked")]
    NoActiveContact,
}

/// Errors that can occur while loading an [`crate::config::EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid scale bounds: min {min} must be positive and not exceed max {max}")]
    ScaleBounds { min: f32, max: f32 },
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidValue { name: &'static str, value: f32 },
}
