use egui::Vec2;
use proptest::prelude::*;
use shinguard_editor::{EngineConfig, ObjectId, TransformModel, TransformState};

fn model() -> TransformModel {
    TransformModel::new(&EngineConfig::default())
}

#[test]
fn missing_entries_read_as_identity() {
    let model = model();
    let id = ObjectId::new();
    assert_eq!(model.get(id), TransformState::identity());
    assert!(!model.contains(id));
}

#[test]
fn scale_is_clamped_to_bounds() {
    let mut model = model();
    let a = ObjectId::new();

    model.adjust_scale(a, 5.0);
    assert_eq!(model.get(a).scale, 2.0);

    model.set_scale(a, 0.01);
    assert_eq!(model.get(a).scale, 0.5);

    model.adjust_scale(a, -1.0);
    assert_eq!(model.get(a).scale, 0.5);
}

#[test]
fn negative_rotation_wraps() {
    let mut model = model();
    let a = ObjectId::new();
    model.adjust_rotation(a, -30.0);
    assert_eq!(model.get(a).rotation, 330.0);

    model.adjust_rotation(a, 45.0);
    assert_eq!(model.get(a).rotation, 15.0);
}

#[test]
fn translation_accumulates_and_reset_restores_identity() {
    let mut model = model();
    let a = ObjectId::new();
    model.translate_by(a, 10.0, -4.0);
    model.translate_by(a, 2.0, 4.0);
    assert_eq!(model.get(a).translation, Vec2::new(12.0, 0.0));

    model.set_scale(a, 1.5);
    model.reset(a);
    assert_eq!(model.get(a), TransformState::identity());
    assert!(model.contains(a));
}

#[test]
fn non_finite_input_is_ignored() {
    let mut model = model();
    let a = ObjectId::new();
    model.set_scale(a, 1.5);
    model.set_scale(a, f32::NAN);
    model.set_rotation(a, f32::INFINITY);
    model.translate_by(a, f32::NAN, 1.0);

    let state = model.get(a);
    assert_eq!(state.scale, 1.5);
    assert_eq!(state.rotation, 0.0);
    assert_eq!(state.translation, Vec2::ZERO);
}

#[test]
fn removal_drops_the_entry() {
    let mut model = model();
    let a = ObjectId::new();
    let b = ObjectId::new();
    model.ensure(a);
    model.ensure(b);
    model.remove(a);
    assert_eq!(model.len(), 1);
    assert!(!model.contains(a));
    assert!(model.contains(b));
}

#[test]
fn custom_bounds_come_from_config() {
    let config = EngineConfig::from_json_str(r#"{ "scale_min": 0.25, "scale_max": 4.0 }"#).unwrap();
    let mut model = TransformModel::new(&config);
    let a = ObjectId::new();
    model.set_scale(a, 3.5);
    assert_eq!(model.get(a).scale, 3.5);
    assert_eq!(model.scale_bounds(), (0.25, 4.0));
}

#[derive(Debug, Clone)]
enum Op {
    Translate(f32, f32),
    SetScale(f32),
    AdjustScale(f32),
    SetRotation(f32),
    AdjustRotation(f32),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1e4f32..1e4, -1e4f32..1e4).prop_map(|(dx, dy)| Op::Translate(dx, dy)),
        (-10f32..10.0).prop_map(Op::SetScale),
        (-3f32..3.0).prop_map(Op::AdjustScale),
        (-1e5f32..1e5).prop_map(Op::SetRotation),
        (-720f32..720.0).prop_map(Op::AdjustRotation),
        Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn scale_and_rotation_stay_in_range(ops in prop::collection::vec(op(), 1..64)) {
        let mut model = model();
        let id = ObjectId::new();
        for op in ops {
            match op {
                Op::Translate(dx, dy) => model.translate_by(id, dx, dy),
                Op::SetScale(s) => model.set_scale(id, s),
                Op::AdjustScale(d) => model.adjust_scale(id, d),
                Op::SetRotation(r) => model.set_rotation(id, r),
                Op::AdjustRotation(d) => model.adjust_rotation(id, d),
                Op::Reset => model.reset(id),
            }
            let state = model.get(id);
            prop_assert!((0.5..=2.0).contains(&state.scale));
            prop_assert!((0.0..360.0).contains(&state.rotation));
        }
    }

    #[test]
    fn rotation_is_periodic(start in -720f32..720.0, turns in -4i32..4) {
        let mut a = model();
        let mut b = model();
        let id = ObjectId::new();
        a.set_rotation(id, start);
        b.set_rotation(id, start + 360.0 * turns as f32);
        let diff = (a.get(id).rotation - b.get(id).rotation).abs();
        prop_assert!(diff < 1e-2 || (360.0 - diff) < 1e-2);
    }
}
