use egui::{Pos2, Rect, Vec2, pos2, vec2};
use shinguard_editor::layout::BaseLayout;
use shinguard_editor::renderer::apply_matrix;
use shinguard_editor::{TransformState, project};

fn close(a: Pos2, b: Pos2) -> bool {
    a.distance(b) < 1e-3
}

#[test]
fn identity_projects_to_the_base_anchor() {
    let placement = project(&BaseLayout::for_index(1), &TransformState::identity());
    assert_eq!(placement.left_percent, 60.0);
    assert_eq!(placement.top_percent, 20.0);
    assert_eq!(placement.css, "translate(0px, 0px) scale(1) rotate(0deg)");
    assert_eq!(apply_matrix(&placement.matrix, vec2(7.0, -3.0)), vec2(7.0, -3.0));
}

#[test]
fn css_lists_translate_scale_rotate_in_order() {
    let transform = TransformState {
        translation: vec2(12.0, -4.0),
        scale: 1.5,
        rotation: 90.0,
    };
    let placement = project(&BaseLayout::for_index(0), &transform);
    assert_eq!(placement.css, "translate(12px, -4px) scale(1.5) rotate(90deg)");
    assert_eq!(placement.scale_percent(), 150);
    assert_eq!(placement.rotation_degrees(), 90);
}

#[test]
fn matrix_rotates_about_the_centre_then_translates() {
    let transform = TransformState {
        translation: vec2(10.0, 0.0),
        scale: 2.0,
        rotation: 90.0,
    };
    let placement = project(&BaseLayout::for_index(0), &transform);

    // A point right of the centre ends up below it, twice as far, then shifted
    let moved = apply_matrix(&placement.matrix, vec2(5.0, 0.0));
    assert!((moved - vec2(10.0, 10.0)).length() < 1e-4);
    assert!((apply_matrix(&placement.matrix, Vec2::ZERO) - vec2(10.0, 0.0)).length() < 1e-6);
}

#[test]
fn resolved_placement_reports_centre_and_corners() {
    let surface = Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 100.0));
    let transform = TransformState {
        translation: vec2(5.0, 5.0),
        scale: 0.5,
        rotation: 0.0,
    };
    let resolved = project(&BaseLayout::for_index(0), &transform).resolve(surface, 80.0);

    // Anchor at 20% of each side, box centre 40px further in
    assert!(close(resolved.base_rect.min, pos2(140.0, 70.0)));
    assert!(close(resolved.center(), pos2(185.0, 115.0)));

    let [nw, ne, se, sw] = resolved.corners();
    assert!(close(nw, pos2(165.0, 95.0)));
    assert!(close(ne, pos2(205.0, 95.0)));
    assert!(close(se, pos2(205.0, 135.0)));
    assert!(close(sw, pos2(165.0, 135.0)));
}

#[test]
fn projection_is_pure() {
    let transform = TransformState {
        translation: vec2(-3.0, 8.0),
        scale: 1.25,
        rotation: 33.0,
    };
    let layout = BaseLayout::for_index(3);
    assert_eq!(project(&layout, &transform), project(&layout, &transform));
}
