//! Pure geometry used by the gesture machine and hit-testing.

use egui::Pos2;

use crate::widgets::Handle;

pub mod hit_testing;

/// Euclidean distance between two contact points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

/// Angle of the segment `a -> b` in degrees, `atan2(dy, dx)`.
///
/// Screen space has y pointing down, so positive angles are clockwise.
pub fn angle_deg(a: Pos2, b: Pos2) -> f32 {
    let d = b - a;
    d.y.atan2(d.x).to_degrees()
}

/// Folds an angle difference into (-180, 180] with a single correction.
pub fn normalize_angle_delta(delta: f32) -> f32 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Scale factor for dragging `handle` by `(dx, dy)` px since the grab.
///
/// Corners combine both axes at `k` per px; edges only see one axis and use `2k`.
pub fn handle_scale_factor(handle: Handle, dx: f32, dy: f32, k: f32) -> f32 {
    let edge = 2.0 * k;
    match handle {
        Handle::NorthWest => 1.0 + (-dx - dy) * k,
        Handle::NorthEast => 1.0 + (dx - dy) * k,
        Handle::SouthWest => 1.0 + (-dx + dy) * k,
        Handle::SouthEast => 1.0 + (dx + dy) * k,
        Handle::North => 1.0 + (-dy) * edge,
        Handle::South => 1.0 + dy * edge,
        Handle::West => 1.0 + (-dx) * edge,
        Handle::East => 1.0 + dx * edge,
    }
}
