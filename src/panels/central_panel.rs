use egui::{Color32, Painter, Sense, Stroke};

use crate::app::{EditorApp, Side};
use crate::renderer::{paint_object, paint_selection};
use crate::surface::Surface;

const SURFACE_FILL: Color32 = Color32::from_gray(245);
const ACTIVE_OUTLINE: Color32 = Color32::from_rgb(59, 130, 246);

pub fn central_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal_top(|ui| {
            for side in Side::BOTH {
                ui.vertical(|ui| {
                    let label = ui.selectable_label(app.active_side() == side, side.label());
                    if label.clicked() {
                        app.set_active_side(side);
                    }

                    let size = app.surface(side).rect().size();
                    // Contacts are handled by the surface itself, the response only claims the area
                    let (response, painter) = ui.allocate_painter(size, Sense::hover());
                    app.surface_mut(side).set_rect(response.rect);
                    paint_surface(app, side, &painter);
                });
                ui.add_space(16.0);
            }
        });
    });
}

fn paint_surface(app: &EditorApp, side: Side, painter: &Painter) {
    let surface: &Surface = app.surface(side);
    let rect = surface.rect();
    let outline = if app.active_side() == side {
        Stroke::new(2.0, ACTIVE_OUTLINE)
    } else {
        Stroke::new(1.0, Color32::from_gray(160))
    };
    painter.rect(rect, 24.0, SURFACE_FILL, outline);

    // Later objects sit on top, same order as hit-testing
    let clipped = painter.with_clip_rect(rect);
    for object in surface.objects() {
        if let Some(placement) = surface.resolved(object.id) {
            let texture = app.texture(object.id).map(|handle| handle.id());
            paint_object(&clipped, &placement, texture);
        }
    }

    if let Some(selected) = surface.selected() {
        if let Some(placement) = surface.resolved(selected) {
            let active = surface
                .active_handle()
                .and_then(|(object, handle)| (object == selected).then_some(handle));
            paint_selection(painter, &placement, surface.config().handle_radius, active);
        }
    }
}
