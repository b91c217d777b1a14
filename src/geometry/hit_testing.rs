use egui::{Pos2, Vec2};

use crate::id::ObjectId;
use crate::renderer::ResolvedPlacement;
use crate::widgets::Handle;

/// What a screen point lands on within a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A resize handle of the selected object
    Handle(ObjectId, Handle),
    Object(ObjectId),
    /// Inside the surface, on no object
    Background,
    /// Not on this surface at all
    Outside,
}

impl HitTarget {
    /// The object under the point, counting handles as part of their object
    pub fn object(&self) -> Option<ObjectId> {
        match self {
            HitTarget::Handle(id, _) | HitTarget::Object(id) => Some(*id),
            HitTarget::Background | HitTarget::Outside => None,
        }
    }
}

/// Maps a screen point into the object's untransformed frame, relative to its centre.
///
/// Returns `None` if the placement's linear part cannot be inverted.
pub fn to_local(placement: &ResolvedPlacement, pos: Pos2) -> Option<Vec2> {
    let m = &placement.matrix;
    let (a, b, c, d) = (m[0][0], m[0][1], m[1][0], m[1][1]);
    let det = a * d - b * c;
    if det.abs() <= f32::EPSILON {
        return None;
    }

    let q = pos - placement.base_rect.center() - Vec2::new(m[0][2], m[1][2]);
    Some(Vec2::new((d * q.x - b * q.y) / det, (-c * q.x + a * q.y) / det))
}

/// True if `pos` lies on the object's rotated, scaled box
pub fn is_point_on_object(pos: Pos2, placement: &ResolvedPlacement) -> bool {
    let half = placement.half_size();
    to_local(placement, pos).is_some_and(|local| local.x.abs() <= half.x && local.y.abs() <= half.y)
}

/// Closest handle within `radius` px of `pos`, if any.
pub fn handle_at(pos: Pos2, placement: &ResolvedPlacement, radius: f32) -> Option<Handle> {
    Handle::ALL
        .iter()
        .map(|&handle| (handle, pos.distance(placement.handle_position(handle))))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BaseLayout;
    use crate::renderer::project;
    use crate::transform::TransformState;
    use egui::{Rect, pos2, vec2};

    fn placement(transform: TransformState) -> ResolvedPlacement {
        // Anchor at (20, 20) on a 100x100 surface
        let surface = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));
        project(&BaseLayout::for_index(0), &transform).resolve(surface, 40.0)
    }

    #[test]
    fn identity_box_is_hit_inside_only() {
        let p = placement(TransformState::identity());
        assert!(is_point_on_object(pos2(21.0, 21.0), &p));
        assert!(is_point_on_object(pos2(59.0, 59.0), &p));
        assert!(!is_point_on_object(pos2(61.0, 40.0), &p));
    }

    #[test]
    fn rotated_box_follows_its_corners() {
        let p = placement(TransformState {
            rotation: 45.0,
            ..TransformState::identity()
        });
        // Rotated 45 degrees the box is a diamond reaching ~28px above its centre
        assert!(is_point_on_object(pos2(40.0, 13.0), &p));
        assert!(!is_point_on_object(pos2(22.0, 22.0), &p));
    }

    #[test]
    fn translation_and_scale_move_the_hit_area() {
        let p = placement(TransformState {
            translation: vec2(100.0, 0.0),
            scale: 2.0,
            rotation: 0.0,
        });
        assert!(!is_point_on_object(pos2(40.0, 40.0), &p));
        // Centre at (140, 40), half-size 40
        assert!(is_point_on_object(pos2(175.0, 75.0), &p));
    }

    #[test]
    fn nearest_handle_wins() {
        let p = placement(TransformState::identity());
        assert_eq!(handle_at(pos2(61.0, 61.0), &p, 10.0), Some(Handle::SouthEast));
        assert_eq!(handle_at(pos2(40.0, 18.0), &p, 10.0), Some(Handle::North));
        assert_eq!(handle_at(pos2(40.0, 40.0), &p, 10.0), None);
    }
}
