use crate::app::{EditorApp, Side};
use crate::controls::{ControlAction, Direction, ZoomDirection};
use crate::file_handler::MAX_OBJECTS_PER_SIDE;

pub fn tools_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Guards");

            for side in Side::BOTH {
                let count = app.surface(side).objects().len();
                let label = format!("{} ({count}/{MAX_OBJECTS_PER_SIDE})", side.label());
                if ui.selectable_label(app.active_side() == side, label).clicked() {
                    log::info!("Side selected from UI: {}", side.label());
                    app.set_active_side(side);
                }
            }
            ui.label("Drop images on the window to add them to the active side.");

            let side = app.active_side();
            if ui
                .add_enabled(app.room_on(side) < MAX_OBJECTS_PER_SIDE, egui::Button::new("Clear side"))
                .clicked()
            {
                app.clear_side(side);
            }

            ui.separator();
            controls(app, ui);
        });
}

fn controls(app: &mut EditorApp, ui: &mut egui::Ui) {
    let readout = app.active_surface().readout();
    ui.heading("Adjust");
    let enabled = readout.is_some();

    let mut button = |ui: &mut egui::Ui, action: ControlAction| {
        if ui.add_enabled(enabled, egui::Button::new(action.label())).clicked() {
            app.apply_control(action);
        }
    };

    egui::Grid::new("move_controls").show(ui, |ui| {
        ui.label("");
        button(ui, ControlAction::Move(Direction::Up));
        ui.label("");
        ui.end_row();
        button(ui, ControlAction::Move(Direction::Left));
        ui.label("");
        button(ui, ControlAction::Move(Direction::Right));
        ui.end_row();
        ui.label("");
        button(ui, ControlAction::Move(Direction::Down));
        ui.label("");
        ui.end_row();
    });

    ui.horizontal(|ui| {
        button(ui, ControlAction::Zoom(ZoomDirection::Out));
        button(ui, ControlAction::Zoom(ZoomDirection::In));
        button(ui, ControlAction::Rotate);
        button(ui, ControlAction::Reset);
    });

    match readout {
        Some(readout) => {
            ui.label(format!("Size: {}%", readout.scale_percent));
            ui.label(format!("Rotation: {}°", readout.rotation_degrees));
        }
        None => {
            ui.weak("Tap an image to select it");
        }
    }
}
