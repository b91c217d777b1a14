use log::debug;
use serde::{Deserialize, Serialize};

use crate::gesture::GestureContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Button-driven adjustments to the selected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    Move(Direction),
    Zoom(ZoomDirection),
    Rotate,
    Reset,
}

impl ControlAction {
    pub fn label(&self) -> &'static str {
        match self {
            ControlAction::Move(Direction::Up) => "⬆",
            ControlAction::Move(Direction::Down) => "⬇",
            ControlAction::Move(Direction::Left) => "⬅",
            ControlAction::Move(Direction::Right) => "➡",
            ControlAction::Zoom(ZoomDirection::In) => "＋",
            ControlAction::Zoom(ZoomDirection::Out) => "－",
            ControlAction::Rotate => "⟳",
            ControlAction::Reset => "Reset",
        }
    }
}

/// Applies `action` to the current selection.
///
/// Independent of any gesture session. Returns false (and does nothing) when
/// nothing is selected.
pub fn apply_control(action: ControlAction, ctx: &mut GestureContext<'_>) -> bool {
    let Some(id) = ctx.selection.current() else {
        debug!("Ignoring {action:?}: nothing selected");
        return false;
    };

    let step = ctx.config.move_step;
    match action {
        ControlAction::Move(direction) => {
            let (dx, dy) = match direction {
                Direction::Up => (0.0, -step),
                Direction::Down => (0.0, step),
                Direction::Left => (-step, 0.0),
                Direction::Right => (step, 0.0),
            };
            ctx.transforms.translate_by(id, dx, dy);
        }
        ControlAction::Zoom(ZoomDirection::In) => ctx.transforms.adjust_scale(id, ctx.config.zoom_step),
        ControlAction::Zoom(ZoomDirection::Out) => ctx.transforms.adjust_scale(id, -ctx.config.zoom_step),
        ControlAction::Rotate => ctx.transforms.adjust_rotation(id, ctx.config.rotate_step),
        ControlAction::Reset => ctx.transforms.reset(id),
    }
    ctx.transform_changed(id);
    true
}
