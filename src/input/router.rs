use egui::{PointerButton, Pos2};
use log::{debug, trace};

use super::InputEvent;
use crate::error::TransitionError;
use crate::geometry::hit_testing::HitTarget;
use crate::gesture::{ContactKind, GestureSession, TapTarget, wheel_zoom};
use crate::surface::Surface;

/// Whether the surface took the event.
///
/// A consumed event targets an object; the host should suppress its default
/// scrolling and text selection for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteOutcome {
    pub consumed: bool,
}

impl RouteOutcome {
    pub const CONSUMED: Self = Self { consumed: true };
    pub const IGNORED: Self = Self { consumed: false };
}

/// Live touches on one surface, in the order they went down.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    touches: Vec<(u64, Pos2)>,
    /// The touch driving a single-contact session
    primary: Option<u64>,
}

impl TouchTracker {
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.touches.iter().any(|(touch, _)| *touch == id)
    }

    fn update(&mut self, id: u64, pos: Pos2) {
        if let Some(entry) = self.touches.iter_mut().find(|(touch, _)| *touch == id) {
            entry.1 = pos;
        }
    }

    fn remove(&mut self, id: u64) {
        self.touches.retain(|(touch, _)| *touch != id);
        if self.primary == Some(id) {
            self.primary = None;
        }
    }

    /// The first two contacts, which drive a pinch
    fn pair(&self) -> Option<(Pos2, Pos2)> {
        match self.touches.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Routes one raw input event to the surface's gesture machine.
pub fn route_event(event: &InputEvent, surface: &mut Surface) -> RouteOutcome {
    match event {
        InputEvent::PointerDown { pos, button } => {
            if *button != PointerButton::Primary {
                return RouteOutcome::IGNORED;
            }
            contact_down(surface, *pos, ContactKind::Pointer)
        }
        InputEvent::PointerMove { pos } => contact_move(surface, *pos),
        InputEvent::PointerUp { pos, button } => {
            if *button != PointerButton::Primary {
                return RouteOutcome::IGNORED;
            }
            contact_up(surface, *pos)
        }
        InputEvent::TouchStart { id, pos } => touch_start(surface, *id, *pos),
        InputEvent::TouchMove { id, pos } => touch_move(surface, *id, *pos),
        InputEvent::TouchEnd { id, pos } => touch_end(surface, *id, Some(*pos)),
        InputEvent::TouchCancel { id } => touch_end(surface, *id, None),
        InputEvent::Wheel { pos, delta } => {
            // Horizontal scrolling is left to the host
            if delta.y == 0.0 || !delta.y.is_finite() {
                return RouteOutcome::IGNORED;
            }
            let Some(object) = surface.hit_test(*pos).object() else {
                return RouteOutcome::IGNORED;
            };
            let (_, _, mut ctx) = surface.split();
            wheel_zoom(object, delta.y, &mut ctx);
            RouteOutcome::CONSUMED
        }
    }
}

fn log_refused(err: TransitionError) {
    debug!("Input dropped: {err}");
}

fn contact_down(surface: &mut Surface, pos: Pos2, kind: ContactKind) -> RouteOutcome {
    let target = surface.hit_test(pos);
    let (machine, _, mut ctx) = surface.split();
    match target {
        HitTarget::Outside => RouteOutcome::IGNORED,
        HitTarget::Handle(object, handle) => match machine.handle_down(object, handle, pos, &mut ctx) {
            Ok(()) => RouteOutcome::CONSUMED,
            Err(err) => {
                log_refused(err);
                RouteOutcome::IGNORED
            }
        },
        HitTarget::Object(object) => {
            machine.contact_down(TapTarget::Object(object), pos, kind, &mut ctx);
            RouteOutcome::CONSUMED
        }
        HitTarget::Background => {
            machine.contact_down(TapTarget::Background, pos, kind, &mut ctx);
            RouteOutcome::IGNORED
        }
    }
}

fn contact_move(surface: &mut Surface, pos: Pos2) -> RouteOutcome {
    let (machine, _, mut ctx) = surface.split();
    if !machine.session().is_single_contact() {
        return RouteOutcome::IGNORED;
    }
    let targets_object = machine.session().object().is_some();
    if let Err(err) = machine.contact_move(pos, &mut ctx) {
        log_refused(err);
    }
    RouteOutcome {
        consumed: targets_object,
    }
}

fn contact_up(surface: &mut Surface, pos: Pos2) -> RouteOutcome {
    let (machine, _, mut ctx) = surface.split();
    if !machine.session().is_single_contact() {
        return RouteOutcome::IGNORED;
    }
    let targets_object = machine.session().object().is_some();
    if let Err(err) = machine.contact_up(pos, &mut ctx) {
        log_refused(err);
    }
    RouteOutcome {
        consumed: targets_object,
    }
}

fn touch_start(surface: &mut Surface, id: u64, pos: Pos2) -> RouteOutcome {
    if surface.touches.is_empty() && surface.hit_test(pos) == HitTarget::Outside {
        return RouteOutcome::IGNORED;
    }
    surface.touches.touches.push((id, pos));

    match surface.touches.len() {
        1 => {
            surface.touches.primary = Some(id);
            contact_down(surface, pos, ContactKind::Touch)
        }
        2 => {
            // The finger already down decides the target before the new one does
            let resting = surface
                .touches
                .touches
                .iter()
                .find(|(touch, _)| *touch != id)
                .map(|(_, resting)| *resting);
            let object = surface
                .session()
                .object()
                .or_else(|| resting.and_then(|resting| surface.hit_test(resting).object()))
                .or_else(|| surface.hit_test(pos).object());
            let (machine, touches, mut ctx) = surface.split();
            let (Some(object), Some((a, b))) = (object, touches.pair()) else {
                trace!("Second touch with no object under either contact");
                return RouteOutcome::IGNORED;
            };
            touches.primary = None;
            machine.pinch_start(object, a, b, &mut ctx);
            RouteOutcome::CONSUMED
        }
        _ => RouteOutcome {
            consumed: matches!(surface.session(), GestureSession::Pinching { .. }),
        },
    }
}

fn touch_move(surface: &mut Surface, id: u64, pos: Pos2) -> RouteOutcome {
    if !surface.touches.contains(id) {
        return RouteOutcome::IGNORED;
    }
    surface.touches.update(id, pos);

    if matches!(surface.session(), GestureSession::Pinching { .. }) {
        let (machine, touches, mut ctx) = surface.split();
        // Extra fingers freeze the pinch until only two remain
        let (2, Some((a, b))) = (touches.len(), touches.pair()) else {
            return RouteOutcome::CONSUMED;
        };
        if let Err(err) = machine.pinch_update(a, b, &mut ctx) {
            log_refused(err);
        }
        return RouteOutcome::CONSUMED;
    }

    if surface.touches.primary == Some(id) {
        return contact_move(surface, pos);
    }
    RouteOutcome::IGNORED
}

/// `pos` is `None` when the host cancelled the touch.
fn touch_end(surface: &mut Surface, id: u64, pos: Option<Pos2>) -> RouteOutcome {
    if !surface.touches.contains(id) {
        return RouteOutcome::IGNORED;
    }
    let was_primary = surface.touches.primary == Some(id);
    surface.touches.remove(id);

    let (machine, touches, mut ctx) = surface.split();
    let mut outcome = RouteOutcome {
        consumed: machine.session().object().is_some(),
    };

    let pinched = match machine.session() {
        GestureSession::Pinching { object, .. } => Some(*object),
        _ => None,
    };
    if let Some(object) = pinched {
        match (touches.len(), touches.pair()) {
            // The remaining pair may not be the one the pinch started with
            (2, Some((a, b))) => machine.pinch_start(object, a, b, &mut ctx),
            (remaining, _) if remaining < 2 => machine.pinch_end(&mut ctx),
            _ => {}
        }
    } else if was_primary && machine.session().is_single_contact() {
        match pos {
            Some(pos) => {
                if let Err(err) = machine.contact_up(pos, &mut ctx) {
                    log_refused(err);
                }
            }
            None => machine.cancel(&mut ctx),
        }
    }

    // Lifting every contact ends whatever is left
    if touches.is_empty() && !machine.session().is_idle() {
        machine.cancel(&mut ctx);
        outcome = RouteOutcome::CONSUMED;
    }
    outcome
}
