use egui::{Color32, CursorIcon, Painter, Pos2, Stroke, Vec2};

const HANDLE_FILL: Color32 = Color32::from_rgb(30, 120, 255);
const HANDLE_ACTIVE_FILL: Color32 = Color32::from_rgb(135, 206, 250);

/// One of the eight grab points on a selected object's box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Handle {
    /// Corners come first so they win over the edges when they overlap on tiny boxes
    pub const ALL: [Handle; 8] = [
        Handle::NorthWest,
        Handle::NorthEast,
        Handle::SouthEast,
        Handle::SouthWest,
        Handle::North,
        Handle::East,
        Handle::South,
        Handle::West,
    ];

    /// Offset of the handle from the box centre, in units of the half-size
    pub fn unit_offset(&self) -> Vec2 {
        match self {
            Handle::North => Vec2::new(0.0, -1.0),
            Handle::South => Vec2::new(0.0, 1.0),
            Handle::East => Vec2::new(1.0, 0.0),
            Handle::West => Vec2::new(-1.0, 0.0),
            Handle::NorthEast => Vec2::new(1.0, -1.0),
            Handle::NorthWest => Vec2::new(-1.0, -1.0),
            Handle::SouthEast => Vec2::new(1.0, 1.0),
            Handle::SouthWest => Vec2::new(-1.0, 1.0),
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Handle::North | Handle::South => CursorIcon::ResizeVertical,
            Handle::East | Handle::West => CursorIcon::ResizeHorizontal,
            Handle::NorthWest | Handle::SouthEast => CursorIcon::ResizeNwSe,
            Handle::NorthEast | Handle::SouthWest => CursorIcon::ResizeNeSw,
        }
    }
}

/// Paints one handle; `active` highlights the handle being dragged.
pub fn paint_handle(painter: &Painter, position: Pos2, radius: f32, active: bool) {
    let fill = if active { HANDLE_ACTIVE_FILL } else { HANDLE_FILL };
    painter.circle_filled(position, radius * 0.6, fill);
    painter.circle_stroke(position, radius * 0.6, Stroke::new(1.0, Color32::WHITE));
}
