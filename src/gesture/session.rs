use egui::Pos2;

use super::capture::PointerCapture;
use crate::event::GestureKind;
use crate::id::ObjectId;
use crate::widgets::Handle;

/// Input device behind a single contact; each has its own drag threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Pointer,
    Touch,
}

/// What a fresh contact landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    Object(ObjectId),
    Background,
}

impl TapTarget {
    pub fn object(&self) -> Option<ObjectId> {
        match self {
            TapTarget::Object(id) => Some(*id),
            TapTarget::Background => None,
        }
    }
}

/// The interaction in progress on a surface. At most one is live.
#[derive(Debug, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    PendingTap {
        target: TapTarget,
        kind: ContactKind,
        start: Pos2,
        capture: PointerCapture,
    },
    Dragging {
        object: ObjectId,
        last: Pos2,
        capture: PointerCapture,
    },
    Pinching {
        object: ObjectId,
        initial_distance: f32,
        initial_angle: f32,
        start_scale: f32,
        start_rotation: f32,
        capture: PointerCapture,
    },
    Resizing {
        object: ObjectId,
        handle: Handle,
        start: Pos2,
        start_scale: f32,
        capture: PointerCapture,
    },
}

impl GestureSession {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PendingTap { .. } => "PendingTap",
            Self::Dragging { .. } => "Dragging",
            Self::Pinching { .. } => "Pinching",
            Self::Resizing { .. } => "Resizing",
        }
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::PendingTap { .. } => Some(GestureKind::PendingTap),
            Self::Dragging { .. } => Some(GestureKind::Drag),
            Self::Pinching { .. } => Some(GestureKind::Pinch),
            Self::Resizing { handle, .. } => Some(GestureKind::Resize(*handle)),
        }
    }

    /// Object the session acts on, if any
    pub fn object(&self) -> Option<ObjectId> {
        match self {
            Self::Idle => None,
            Self::PendingTap { target, .. } => target.object(),
            Self::Dragging { object, .. }
            | Self::Pinching { object, .. }
            | Self::Resizing { object, .. } => Some(*object),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True for sessions driven by one contact (tap, drag, resize)
    pub fn is_single_contact(&self) -> bool {
        matches!(
            self,
            Self::PendingTap { .. } | Self::Dragging { .. } | Self::Resizing { .. }
        )
    }
}
