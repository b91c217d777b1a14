use egui::{Context, Event, MouseWheelUnit, PointerButton, Pos2, TouchPhase, Vec2};
use std::collections::HashSet;

mod router;
pub use router::{RouteOutcome, TouchTracker, route_event};

/// Pixels per line for line-based wheel deltas
const WHEEL_LINE_HEIGHT: f32 = 16.0;

/// Raw input in surface-independent terms, one variant per host event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pos: Pos2,
        button: PointerButton,
    },
    PointerMove {
        pos: Pos2,
    },
    PointerUp {
        pos: Pos2,
        button: PointerButton,
    },
    TouchStart {
        id: u64,
        pos: Pos2,
    },
    TouchMove {
        id: u64,
        pos: Pos2,
    },
    TouchEnd {
        id: u64,
        pos: Pos2,
    },
    TouchCancel {
        id: u64,
    },
    /// `delta.y > 0` means the wheel rolled away from the user
    Wheel {
        pos: Pos2,
        delta: Vec2,
    },
}

/// Converts raw egui input into [`InputEvent`]s.
///
/// Touch screens also produce synthesized pointer events for the first
/// finger; those are dropped while touches are live so a finger is not seen
/// twice.
#[derive(Debug, Default)]
pub struct InputHandler {
    live_touches: HashSet<u64>,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touches_live(&self) -> bool {
        !self.live_touches.is_empty()
    }

    /// Process this frame's raw egui events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.convert(&input.events, input.pointer.hover_pos()))
    }

    /// Converts one frame's worth of egui events.
    pub fn convert(&mut self, raw: &[Event], hover_pos: Option<Pos2>) -> Vec<InputEvent> {
        let frame_has_touch = raw.iter().any(|e| matches!(e, Event::Touch { .. }));
        let mut events = Vec::new();

        for event in raw {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    let id = id.0;
                    match phase {
                        TouchPhase::Start => {
                            self.live_touches.insert(id);
                            events.push(InputEvent::TouchStart { id, pos: *pos });
                        }
                        TouchPhase::Move => events.push(InputEvent::TouchMove { id, pos: *pos }),
                        TouchPhase::End => {
                            self.live_touches.remove(&id);
                            events.push(InputEvent::TouchEnd { id, pos: *pos });
                        }
                        TouchPhase::Cancel => {
                            self.live_touches.remove(&id);
                            events.push(InputEvent::TouchCancel { id });
                        }
                    }
                }
                _ if frame_has_touch || self.touches_live() => {}
                Event::PointerMoved(pos) => {
                    self.last_pointer_pos = Some(*pos);
                    events.push(InputEvent::PointerMove { pos: *pos });
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    self.last_pointer_pos = Some(*pos);
                    events.push(if *pressed {
                        InputEvent::PointerDown {
                            pos: *pos,
                            button: *button,
                        }
                    } else {
                        InputEvent::PointerUp {
                            pos: *pos,
                            button: *button,
                        }
                    });
                }
                Event::MouseWheel { unit, delta, .. } => {
                    let Some(pos) = hover_pos.or(self.last_pointer_pos) else {
                        continue;
                    };
                    let delta = match unit {
                        MouseWheelUnit::Point => *delta,
                        MouseWheelUnit::Line => *delta * WHEEL_LINE_HEIGHT,
                        MouseWheelUnit::Page => *delta * WHEEL_LINE_HEIGHT * 10.0,
                    };
                    events.push(InputEvent::Wheel { pos, delta });
                }
                _ => {}
            }
        }

        events
    }
}
