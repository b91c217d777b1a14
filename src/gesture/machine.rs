use egui::{Pos2, Vec2};
use log::{debug, trace};

use super::capture::CaptureTracker;
use super::session::{ContactKind, GestureSession, TapTarget};
use crate::config::EngineConfig;
use crate::error::TransitionError;
use crate::event::{EngineEvent, EventBus, GestureEndReason, GestureKind};
use crate::geometry::{angle_deg, distance, handle_scale_factor, normalize_angle_delta};
use crate::id::ObjectId;
use crate::selection::SelectionManager;
use crate::transform::TransformModel;
use crate::widgets::Handle;

/// Everything a transition may touch besides the session itself.
pub struct GestureContext<'a> {
    pub transforms: &'a mut TransformModel,
    pub selection: &'a mut SelectionManager,
    pub events: &'a EventBus,
    pub config: &'a EngineConfig,
}

impl GestureContext<'_> {
    pub fn select(&mut self, id: ObjectId) {
        let previous = self.selection.current();
        if self.selection.select(id) {
            self.events.emit(EngineEvent::SelectionChanged {
                previous,
                current: Some(id),
            });
        }
    }

    pub fn deselect(&mut self) {
        let previous = self.selection.current();
        if self.selection.deselect() {
            self.events.emit(EngineEvent::SelectionChanged {
                previous,
                current: None,
            });
        }
    }

    pub fn toggle(&mut self, id: ObjectId) {
        if self.selection.is_selected(id) {
            self.deselect();
        } else {
            self.select(id);
        }
    }

    pub fn transform_changed(&self, id: ObjectId) {
        self.events.emit(EngineEvent::TransformChanged {
            object: id,
            transform: self.transforms.get(id),
        });
    }
}

/// Drives the per-surface gesture session.
///
/// One entry point per classified event; each runs the transition for the
/// current session and returns before the next event is looked at.
#[derive(Debug, Default)]
pub struct GestureMachine {
    session: GestureSession,
    captures: CaptureTracker,
}

impl GestureMachine {
    pub fn new(captures: CaptureTracker) -> Self {
        Self {
            session: GestureSession::Idle,
            captures,
        }
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn captures(&self) -> &CaptureTracker {
        &self.captures
    }

    /// True while a session holds the pointer
    pub fn is_capturing(&self) -> bool {
        !self.session.is_idle()
    }

    pub fn active_handle(&self) -> Option<(ObjectId, Handle)> {
        match &self.session {
            GestureSession::Resizing { object, handle, .. } => Some((*object, *handle)),
            _ => None,
        }
    }

    fn begin(&mut self, session: GestureSession, ctx: &mut GestureContext<'_>) {
        self.end(GestureEndReason::Superseded, ctx);
        debug!("Gesture session -> {}", session.name());
        if let Some(kind) = session.kind() {
            ctx.events.emit(EngineEvent::GestureStarted {
                object: session.object(),
                kind,
            });
        }
        self.session = session;
    }

    fn end(&mut self, reason: GestureEndReason, ctx: &mut GestureContext<'_>) {
        // Dropping the old session releases its capture
        let previous = std::mem::take(&mut self.session);
        if let Some(kind) = previous.kind() {
            debug!("Gesture session {} ended: {reason:?}", previous.name());
            ctx.events.emit(EngineEvent::GestureEnded {
                object: previous.object(),
                kind,
                reason,
            });
        }
    }

    /// A single contact went down on an object or on the background.
    pub fn contact_down(
        &mut self,
        target: TapTarget,
        pos: Pos2,
        kind: ContactKind,
        ctx: &mut GestureContext<'_>,
    ) {
        let capture = self.captures.acquire("tap");
        self.begin(
            GestureSession::PendingTap {
                target,
                kind,
                start: pos,
                capture,
            },
            ctx,
        );
    }

    /// A contact went down on one of the selected object's handles.
    pub fn handle_down(
        &mut self,
        object: ObjectId,
        handle: Handle,
        pos: Pos2,
        ctx: &mut GestureContext<'_>,
    ) -> Result<(), TransitionError> {
        if !ctx.selection.is_selected(object) {
            return Err(TransitionError::NotSelected(object));
        }
        if !ctx.transforms.contains(object) {
            return Err(TransitionError::UnknownObject(object));
        }
        let start_scale = ctx.transforms.get(object).scale;
        let capture = self.captures.acquire("resize");
        self.begin(
            GestureSession::Resizing {
                object,
                handle,
                start: pos,
                start_scale,
                capture,
            },
            ctx,
        );
        Ok(())
    }

    /// The tracked single contact moved to `pos`.
    pub fn contact_move(
        &mut self,
        pos: Pos2,
        ctx: &mut GestureContext<'_>,
    ) -> Result<(), TransitionError> {
        match &mut self.session {
            GestureSession::Idle => Err(TransitionError::NoActiveContact),
            GestureSession::Pinching { .. } => Err(TransitionError::InvalidStateTransition {
                from: "Pinching",
                to: "Dragging",
            }),
            GestureSession::PendingTap {
                target, kind, start, ..
            } => {
                let threshold = match kind {
                    ContactKind::Pointer => ctx.config.pointer_drag_threshold,
                    ContactKind::Touch => ctx.config.touch_drag_threshold,
                };
                if distance(*start, pos) < threshold {
                    return Ok(());
                }
                let (target, start) = (*target, *start);
                match target {
                    TapTarget::Background => self.end(GestureEndReason::Inert, ctx),
                    TapTarget::Object(object) => self.promote_to_drag(object, start, pos, ctx),
                }
                Ok(())
            }
            GestureSession::Dragging { object, last, .. } => {
                let delta = pos - *last;
                *last = pos;
                if delta != Vec2::ZERO {
                    ctx.transforms.translate_by(*object, delta.x, delta.y);
                    ctx.transform_changed(*object);
                }
                Ok(())
            }
            GestureSession::Resizing {
                object,
                handle,
                start,
                start_scale,
                ..
            } => {
                let d = pos - *start;
                let factor = handle_scale_factor(*handle, d.x, d.y, ctx.config.resize_sensitivity);
                ctx.transforms.set_scale(*object, *start_scale * factor);
                ctx.transform_changed(*object);
                Ok(())
            }
        }
    }

    fn promote_to_drag(
        &mut self,
        object: ObjectId,
        start: Pos2,
        pos: Pos2,
        ctx: &mut GestureContext<'_>,
    ) {
        let GestureSession::PendingTap { capture, .. } = std::mem::take(&mut self.session) else {
            return;
        };

        ctx.select(object);
        let accumulated = pos - start;
        ctx.transforms.translate_by(object, accumulated.x, accumulated.y);
        ctx.transform_changed(object);

        debug!("Gesture session PendingTap -> Dragging for {object}");
        ctx.events.emit(EngineEvent::GestureStarted {
            object: Some(object),
            kind: GestureKind::Drag,
        });
        self.session = GestureSession::Dragging {
            object,
            last: pos,
            capture,
        };
    }

    /// The tracked single contact lifted at `pos`.
    ///
    /// A contact that never crossed its drag threshold resolves as a tap:
    /// it toggles the object's selection, or clears it on the background.
    pub fn contact_up(
        &mut self,
        pos: Pos2,
        ctx: &mut GestureContext<'_>,
    ) -> Result<(), TransitionError> {
        if !self.session.is_single_contact() {
            return Err(TransitionError::NoActiveContact);
        }
        self.contact_move(pos, ctx)?;

        let tapped = match &self.session {
            GestureSession::PendingTap { target, .. } => Some(*target),
            _ => None,
        };
        self.end(GestureEndReason::Released, ctx);

        if let Some(target) = tapped {
            ctx.events.emit(EngineEvent::Tapped {
                object: target.object(),
            });
            match target {
                TapTarget::Object(object) => ctx.toggle(object),
                TapTarget::Background => ctx.deselect(),
            }
        }
        Ok(())
    }

    /// Two contacts are down; the pinch takes over whatever was running.
    pub fn pinch_start(&mut self, object: ObjectId, a: Pos2, b: Pos2, ctx: &mut GestureContext<'_>) {
        let current = ctx.transforms.get(object);
        let capture = self.captures.acquire("pinch");
        self.begin(
            GestureSession::Pinching {
                object,
                initial_distance: distance(a, b),
                initial_angle: angle_deg(a, b),
                start_scale: current.scale,
                start_rotation: current.rotation,
                capture,
            },
            ctx,
        );
        ctx.select(object);
    }

    /// Both pinch contacts are now at `a` and `b`.
    ///
    /// Scale and rotation are recomputed from the session's start snapshot.
    pub fn pinch_update(
        &mut self,
        a: Pos2,
        b: Pos2,
        ctx: &mut GestureContext<'_>,
    ) -> Result<(), TransitionError> {
        let GestureSession::Pinching {
            object,
            initial_distance,
            initial_angle,
            start_scale,
            start_rotation,
            ..
        } = &self.session
        else {
            return Err(TransitionError::InvalidStateTransition {
                from: self.session.name(),
                to: "Pinching",
            });
        };

        if *initial_distance > f32::EPSILON {
            let ratio = distance(a, b) / initial_distance;
            if ratio.is_finite() {
                ctx.transforms.set_scale(*object, start_scale * ratio);
            }
        } else {
            trace!("Pinch started with coincident contacts, skipping scale step");
        }

        let angle_delta = normalize_angle_delta(angle_deg(a, b) - initial_angle);
        ctx.transforms.set_rotation(*object, start_rotation + angle_delta);
        ctx.transform_changed(*object);
        Ok(())
    }

    /// Fewer than two contacts remain.
    pub fn pinch_end(&mut self, ctx: &mut GestureContext<'_>) {
        if matches!(self.session, GestureSession::Pinching { .. }) {
            self.end(GestureEndReason::Released, ctx);
        }
    }

    /// The host cancelled the contact; no tap is resolved.
    pub fn cancel(&mut self, ctx: &mut GestureContext<'_>) {
        self.end(GestureEndReason::Cancelled, ctx);
    }

    /// Discards the session if it tracks `object`. Returns true if it did.
    pub fn object_removed(&mut self, object: ObjectId, ctx: &mut GestureContext<'_>) -> bool {
        if self.session.object() == Some(object) {
            self.end(GestureEndReason::ObjectRemoved, ctx);
            true
        } else {
            false
        }
    }
}

/// Wheel zoom on `object`. Bypasses the session entirely.
///
/// `scroll_y > 0` (wheel rolled away from the user) zooms in.
pub fn wheel_zoom(object: ObjectId, scroll_y: f32, ctx: &mut GestureContext<'_>) {
    if scroll_y == 0.0 || !scroll_y.is_finite() {
        return;
    }
    let step = ctx.config.wheel_step.copysign(scroll_y);
    ctx.transforms.adjust_scale(object, step);
    ctx.select(object);
    ctx.transform_changed(object);
}
