use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

/// Anchor of an object's box, as percentages of the surface's bounding box.
///
/// Assigned once when the object first appears and kept until it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseLayout {
    pub left_percent: f32,
    pub top_percent: f32,
}

impl BaseLayout {
    /// Two-column grid: even indices on the left, odd on the right, a row per pair
    pub fn for_index(index: usize) -> Self {
        Self {
            left_percent: 20.0 + (index % 2) as f32 * 40.0,
            top_percent: 20.0 + (index / 2) as f32 * 40.0,
        }
    }

    /// Top-left corner of the untransformed box inside `surface`
    pub fn anchor_in(&self, surface: Rect) -> Pos2 {
        Pos2::new(
            surface.min.x + surface.width() * self.left_percent / 100.0,
            surface.min.y + surface.height() * self.top_percent / 100.0,
        )
    }
}
