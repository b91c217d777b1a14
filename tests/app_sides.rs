mod common;

use common::objects;
use shinguard_editor::file_handler::MAX_OBJECTS_PER_SIDE;
use shinguard_editor::{ControlAction, EditorApp, EngineConfig, Side};

#[test]
fn each_side_caps_its_objects() {
    let mut app = EditorApp::headless(EngineConfig::default());
    app.add_objects(Side::Left, objects(6));

    assert_eq!(app.surface(Side::Left).objects().len(), MAX_OBJECTS_PER_SIDE);
    assert_eq!(app.room_on(Side::Left), 0);
    assert_eq!(app.room_on(Side::Right), MAX_OBJECTS_PER_SIDE);
    assert!(app.surface(Side::Right).objects().is_empty());
}

#[test]
fn clearing_a_side_leaves_the_other_alone() {
    let mut app = EditorApp::headless(EngineConfig::default());
    app.add_objects(Side::Left, objects(2));
    app.add_objects(Side::Right, objects(1));

    app.clear_side(Side::Left);
    assert!(app.surface(Side::Left).objects().is_empty());
    assert_eq!(app.surface(Side::Left).layout_count(), 0);
    assert_eq!(app.surface(Side::Right).objects().len(), 1);
}

#[test]
fn removing_one_object_keeps_the_rest_in_place() {
    let mut app = EditorApp::headless(EngineConfig::default());
    let added = objects(3);
    app.add_objects(Side::Right, added.clone());
    let last = app.surface(Side::Right).layout(added[2].id);

    app.remove_object(Side::Right, added[0].id);
    let surface = app.surface(Side::Right);
    assert_eq!(surface.objects().len(), 2);
    assert_eq!(surface.layout(added[2].id), last);
}

#[test]
fn controls_act_on_the_active_side() {
    let mut app = EditorApp::headless(EngineConfig::default());
    app.add_objects(Side::Left, objects(1));
    app.add_objects(Side::Right, objects(1));

    app.set_active_side(Side::Right);
    assert_eq!(app.active_side(), Side::Right);
    // Nothing is selected on the right yet
    assert!(!app.apply_control(ControlAction::Rotate));
    assert!(app.active_surface().readout().is_none());
}
