#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use egui::{PointerButton, Pos2, Vec2};
use shinguard_editor::event::{EngineEvent, EventHandler};
use shinguard_editor::{EngineConfig, InputEvent, ObjectId, Surface, SurfaceObject};

/// Collects every event a surface emits
#[derive(Clone, Default)]
pub struct Recorder(pub Rc<RefCell<Vec<EngineEvent>>>);

impl Recorder {
    pub fn take(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &EngineEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

pub fn objects(count: usize) -> Vec<SurfaceObject> {
    (0..count)
        .map(|i| SurfaceObject::new(format!("guard{i}.png")))
        .collect()
}

/// A default-sized surface holding `count` objects, with a recorder attached.
pub fn surface_with(count: usize) -> (Surface, Vec<ObjectId>, Recorder) {
    let mut surface = Surface::new("test", EngineConfig::default());
    let recorder = Recorder::default();
    surface.events().subscribe(Box::new(recorder.clone()));
    let objects = objects(count);
    surface.sync_objects(&objects);
    recorder.take();
    (surface, objects.iter().map(|o| o.id).collect(), recorder)
}

pub fn center(surface: &Surface, id: ObjectId) -> Pos2 {
    surface.resolved(id).unwrap().center()
}

pub fn down(surface: &mut Surface, pos: Pos2) -> bool {
    surface
        .handle_input(&InputEvent::PointerDown {
            pos,
            button: PointerButton::Primary,
        })
        .consumed
}

pub fn move_to(surface: &mut Surface, pos: Pos2) -> bool {
    surface.handle_input(&InputEvent::PointerMove { pos }).consumed
}

pub fn up(surface: &mut Surface, pos: Pos2) -> bool {
    surface
        .handle_input(&InputEvent::PointerUp {
            pos,
            button: PointerButton::Primary,
        })
        .consumed
}

/// Full press, move and release of the mouse
pub fn drag(surface: &mut Surface, from: Pos2, by: Vec2) {
    down(surface, from);
    move_to(surface, from + by);
    up(surface, from + by);
}

pub fn tap(surface: &mut Surface, pos: Pos2) {
    down(surface, pos);
    up(surface, pos);
}

pub fn touch_start(surface: &mut Surface, id: u64, pos: Pos2) -> bool {
    surface.handle_input(&InputEvent::TouchStart { id, pos }).consumed
}

pub fn touch_move(surface: &mut Surface, id: u64, pos: Pos2) -> bool {
    surface.handle_input(&InputEvent::TouchMove { id, pos }).consumed
}

pub fn touch_end(surface: &mut Surface, id: u64, pos: Pos2) -> bool {
    surface.handle_input(&InputEvent::TouchEnd { id, pos }).consumed
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
