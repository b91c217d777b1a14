use crate::id::ObjectId;
use crate::transform::TransformState;
use crate::widgets::Handle;

/// Kind of interaction a gesture session represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    PendingTap,
    Drag,
    Pinch,
    Resize(Handle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEndReason {
    /// Contact lifted
    Released,
    /// Replaced by another session, e.g. a pinch taking over a drag
    Superseded,
    /// The tracked object left the surface
    ObjectRemoved,
    /// The host cancelled the contact
    Cancelled,
    /// A background contact moved away; nothing to do
    Inert,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ObjectAdded {
        object: ObjectId,
        index: usize,
    },
    ObjectRemoved {
        object: ObjectId,
    },
    SelectionChanged {
        previous: Option<ObjectId>,
        current: Option<ObjectId>,
    },
    GestureStarted {
        object: Option<ObjectId>,
        kind: GestureKind,
    },
    GestureEnded {
        object: Option<ObjectId>,
        kind: GestureKind,
        reason: GestureEndReason,
    },
    Tapped {
        object: Option<ObjectId>,
    },
    TransformChanged {
        object: ObjectId,
        transform: TransformState,
    },
}
