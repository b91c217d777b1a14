use std::collections::HashMap;

use egui::{TextureHandle, TextureOptions, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::controls::ControlAction;
use crate::event::LogEventHandler;
use crate::file_handler::{FileHandler, MAX_OBJECTS_PER_SIDE};
use crate::id::{ObjectId, SurfaceObject};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::surface::Surface;

/// One of the two guards being designed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Left guard",
            Side::Right => "Right guard",
        }
    }

    fn index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// The part of the editor that survives a restart.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct EditorPrefs {
    active_side: Side,
}

pub struct EditorApp {
    surfaces: [Surface; 2],
    /// Object sequences as supplied upstream, one per side
    sequences: [Vec<SurfaceObject>; 2],
    textures: HashMap<ObjectId, TextureHandle>,
    input: InputHandler,
    files: FileHandler,
    prefs: EditorPrefs,
}

impl EditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        let prefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_prefs(config, prefs)
    }

    /// An app with no stored state, for hosts without a creation context.
    pub fn headless(config: EngineConfig) -> Self {
        Self::with_prefs(config, EditorPrefs::default())
    }

    fn with_prefs(config: EngineConfig, prefs: EditorPrefs) -> Self {
        let surfaces = Side::BOTH.map(|side| {
            let surface = Surface::new(side.label(), config.clone());
            surface.events().subscribe(Box::new(LogEventHandler::new(side.label())));
            surface
        });
        Self {
            surfaces,
            sequences: [Vec::new(), Vec::new()],
            textures: HashMap::new(),
            input: InputHandler::new(),
            files: FileHandler::new(),
            prefs,
        }
    }

    pub fn active_side(&self) -> Side {
        self.prefs.active_side
    }

    pub fn set_active_side(&mut self, side: Side) {
        if self.prefs.active_side != side {
            log::info!("Active side: {}", side.label());
            self.prefs.active_side = side;
        }
    }

    pub fn surface(&self, side: Side) -> &Surface {
        &self.surfaces[side.index()]
    }

    pub fn surface_mut(&mut self, side: Side) -> &mut Surface {
        &mut self.surfaces[side.index()]
    }

    pub fn active_surface(&self) -> &Surface {
        self.surface(self.active_side())
    }

    pub fn texture(&self, id: ObjectId) -> Option<&TextureHandle> {
        self.textures.get(&id)
    }

    pub fn room_on(&self, side: Side) -> usize {
        MAX_OBJECTS_PER_SIDE.saturating_sub(self.sequences[side.index()].len())
    }

    /// Appends objects to a side's sequence, up to the per-side cap.
    pub fn add_objects(&mut self, side: Side, objects: impl IntoIterator<Item = SurfaceObject>) {
        let sequence = &mut self.sequences[side.index()];
        for object in objects {
            if sequence.len() >= MAX_OBJECTS_PER_SIDE {
                log::warn!("{} is full, dropping {}", side.label(), object.image);
                break;
            }
            sequence.push(object);
        }
        self.surfaces[side.index()].sync_objects(&self.sequences[side.index()]);
    }

    pub fn remove_object(&mut self, side: Side, id: ObjectId) {
        self.sequences[side.index()].retain(|object| object.id != id);
        self.surfaces[side.index()].sync_objects(&self.sequences[side.index()]);
        self.textures.remove(&id);
    }

    /// Empties one side
    pub fn clear_side(&mut self, side: Side) {
        for object in std::mem::take(&mut self.sequences[side.index()]) {
            self.textures.remove(&object.id);
        }
        self.surfaces[side.index()].sync_objects(&[]);
    }

    pub fn apply_control(&mut self, action: ControlAction) -> bool {
        let side = self.active_side();
        self.surface_mut(side).apply_control(action)
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.files.preview_files_being_dropped(ctx);
        if !self.files.check_for_dropped_files(ctx) {
            return;
        }

        let side = self.active_side();
        let uploads = self.files.take_uploads(self.room_on(side));
        let mut objects = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let texture = ctx.load_texture(
                format!("object_{}", upload.object.id),
                upload.image,
                TextureOptions::LINEAR,
            );
            self.textures.insert(upload.object.id, texture);
            objects.push(upload.object);
        }
        self.add_objects(side, objects);
    }

    /// Routes this frame's raw input to both surfaces.
    ///
    /// Each surface ignores contacts that did not start on it.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let events = self.input.process_input(ctx);
        let mut consumed = false;
        for event in &events {
            for surface in &mut self.surfaces {
                consumed |= surface.handle_input(event).consumed;
            }
        }

        if consumed {
            ctx.input_mut(|i| i.smooth_scroll_delta = Vec2::ZERO);
        }

        let hover = ctx.input(|i| i.pointer.hover_pos());
        let cursor = hover.and_then(|pos| {
            self.surfaces
                .iter()
                .find_map(|surface| surface.hover_cursor(pos))
        });
        if let Some(cursor) = cursor {
            ctx.set_cursor_icon(cursor);
        }
    }
}

impl eframe::App for EditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_input(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
