use egui::{CursorIcon, Pos2, Rect, Vec2};
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

use crate::config::EngineConfig;
use crate::controls::{ControlAction, apply_control};
use crate::event::{EngineEvent, EventBus};
use crate::geometry::hit_testing::{HitTarget, handle_at, is_point_on_object};
use crate::gesture::{CaptureTracker, GestureContext, GestureMachine, GestureSession};
use crate::id::{ObjectId, SurfaceObject};
use crate::input::{InputEvent, RouteOutcome, TouchTracker, route_event};
use crate::layout::BaseLayout;
use crate::renderer::{ResolvedPlacement, ScreenPlacement, project};
use crate::selection::SelectionManager;
use crate::transform::{TransformModel, TransformState};
use crate::widgets::Handle;

/// Default surface box, the size of one guard outline
const DEFAULT_SURFACE_SIZE: Vec2 = Vec2::new(320.0, 384.0);

/// Numbers shown next to the selected object's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub object: ObjectId,
    pub scale_percent: i32,
    pub rotation_degrees: i32,
}

/// One bounded placement surface and everything that acts on it.
#[derive(Debug)]
pub struct Surface {
    name: String,
    pub(crate) config: EngineConfig,
    rect: Rect,
    objects: Vec<SurfaceObject>,
    layouts: HashMap<ObjectId, BaseLayout>,
    pub(crate) transforms: TransformModel,
    pub(crate) selection: SelectionManager,
    pub(crate) machine: GestureMachine,
    pub(crate) touches: TouchTracker,
    pub(crate) events: EventBus,
}

impl Surface {
    pub fn new(name: impl Into<String>, config: EngineConfig) -> Self {
        Self {
            name: name.into(),
            transforms: TransformModel::new(&config),
            config,
            rect: Rect::from_min_size(Pos2::ZERO, DEFAULT_SURFACE_SIZE),
            objects: Vec::new(),
            layouts: HashMap::new(),
            selection: SelectionManager::new(),
            machine: GestureMachine::new(CaptureTracker::new()),
            touches: TouchTracker::default(),
            events: EventBus::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The host reports where the surface currently sits on screen
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn objects(&self) -> &[SurfaceObject] {
        &self.objects
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selection.current()
    }

    pub fn session(&self) -> &GestureSession {
        self.machine.session()
    }

    pub fn captures(&self) -> &CaptureTracker {
        self.machine.captures()
    }

    /// The handle being dragged, if a resize is running
    pub fn active_handle(&self) -> Option<(ObjectId, Handle)> {
        self.machine.active_handle()
    }

    pub fn transforms(&self) -> &TransformModel {
        &self.transforms
    }

    pub fn transform(&self, id: ObjectId) -> TransformState {
        self.transforms.get(id)
    }

    pub fn layout(&self, id: ObjectId) -> Option<BaseLayout> {
        self.layouts.get(&id).copied()
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Borrows the machine and the context its transitions need.
    pub(crate) fn split(&mut self) -> (&mut GestureMachine, &mut TouchTracker, GestureContext<'_>) {
        (
            &mut self.machine,
            &mut self.touches,
            GestureContext {
                transforms: &mut self.transforms,
                selection: &mut self.selection,
                events: &self.events,
                config: &self.config,
            },
        )
    }

    /// Reconciles the surface with a new object sequence from upstream.
    ///
    /// New ids get an identity transform and a base layout from their index;
    /// ids that disappeared lose both, their session and their selection.
    pub fn sync_objects(&mut self, objects: &[SurfaceObject]) {
        let mut seen = HashSet::new();
        let incoming: Vec<SurfaceObject> = objects
            .iter()
            .filter(|object| {
                let fresh = seen.insert(object.id);
                if !fresh {
                    warn!("{}: duplicate object {} ignored", self.name, object.id);
                }
                fresh
            })
            .cloned()
            .collect();

        let removed: Vec<ObjectId> = self
            .objects
            .iter()
            .map(|object| object.id)
            .filter(|id| !seen.contains(id))
            .collect();

        for id in removed {
            let (machine, _, mut ctx) = self.split();
            if machine.object_removed(id, &mut ctx) {
                debug!("Discarded gesture on removed object {id}");
            }
            if ctx.selection.is_selected(id) {
                ctx.deselect();
            }
            self.transforms.remove(id);
            self.layouts.remove(&id);
            self.events.emit(EngineEvent::ObjectRemoved { object: id });
            info!("{}: removed {id}", self.name);
        }

        for (index, object) in incoming.iter().enumerate() {
            if self.layouts.contains_key(&object.id) {
                continue;
            }
            let layout = self.free_layout(index);
            self.layouts.insert(object.id, layout);
            self.transforms.ensure(object.id);
            self.events.emit(EngineEvent::ObjectAdded {
                object: object.id,
                index,
            });
            info!("{}: added {} at index {index}", self.name, object.id);
        }

        self.objects = incoming;
    }

    /// Grid slot for an object arriving at `index`.
    ///
    /// After a removal the index can point at a slot a present object still
    /// holds; the first free slot is used instead.
    fn free_layout(&self, index: usize) -> BaseLayout {
        let taken = |layout: &BaseLayout| self.layouts.values().any(|used| used == layout);
        let preferred = BaseLayout::for_index(index);
        if !taken(&preferred) {
            return preferred;
        }
        (0..)
            .map(BaseLayout::for_index)
            .find(|layout| !taken(layout))
            .unwrap_or(preferred)
    }

    pub fn placement(&self, id: ObjectId) -> Option<ScreenPlacement> {
        let layout = self.layouts.get(&id)?;
        Some(project(layout, &self.transforms.get(id)))
    }

    pub fn resolved(&self, id: ObjectId) -> Option<ResolvedPlacement> {
        self.placement(id)
            .map(|placement| placement.resolve(self.rect, self.config.object_size))
    }

    pub fn readout(&self) -> Option<Readout> {
        let object = self.selection.current()?;
        let transform = self.transforms.get(object);
        Some(Readout {
            object,
            scale_percent: transform.scale_percent(),
            rotation_degrees: transform.rotation_degrees(),
        })
    }

    /// Transforms of every present object, in sequence order
    pub fn snapshot(&self) -> Vec<(ObjectId, TransformState)> {
        self.objects
            .iter()
            .map(|object| (object.id, self.transforms.get(object.id)))
            .collect()
    }

    /// Resolves what `pos` lands on: the selected object's handles first, then
    /// objects from the top of the stack down.
    ///
    /// Handles are painted unclipped, so they stay grabbable past the surface edge.
    pub fn hit_test(&self, pos: Pos2) -> HitTarget {
        if let Some(selected) = self.selection.current() {
            if let Some(placement) = self.resolved(selected) {
                if let Some(handle) = handle_at(pos, &placement, self.config.handle_radius) {
                    return HitTarget::Handle(selected, handle);
                }
            }
        }

        if !self.rect.contains(pos) {
            return HitTarget::Outside;
        }

        self.objects
            .iter()
            .rev()
            .find(|object| {
                self.resolved(object.id)
                    .is_some_and(|placement| is_point_on_object(pos, &placement))
            })
            .map_or(HitTarget::Background, |object| HitTarget::Object(object.id))
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> RouteOutcome {
        route_event(event, self)
    }

    /// Button-driven adjustment of the current selection
    pub fn apply_control(&mut self, action: ControlAction) -> bool {
        let (_, _, mut ctx) = self.split();
        apply_control(action, &mut ctx)
    }

    /// Cursor to show for a pointer hovering at `pos`
    pub fn hover_cursor(&self, pos: Pos2) -> Option<CursorIcon> {
        match self.machine.session() {
            GestureSession::Resizing { handle, .. } => return Some(handle.cursor_icon()),
            GestureSession::Dragging { .. } => return Some(CursorIcon::Grabbing),
            _ => {}
        }
        match self.hit_test(pos) {
            HitTarget::Handle(_, handle) => Some(handle.cursor_icon()),
            HitTarget::Object(_) => Some(CursorIcon::Grab),
            HitTarget::Background | HitTarget::Outside => None,
        }
    }
}
