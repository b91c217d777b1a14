#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use shinguard_editor::{EditorApp, EngineConfig};

/// Optional JSON file overriding the engine's tuning constants
const CONFIG_ENV: &str = "SHINGUARD_CONFIG";

fn load_config() -> EngineConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return EngineConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|json| EngineConfig::from_json_str(&json).map_err(|err| err.to_string()));
    match loaded {
        Ok(config) => {
            log::info!("Loaded engine config from {path}");
            config
        }
        Err(err) => {
            log::error!("Ignoring {path}: {err}");
            EngineConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 560.0])
            .with_min_inner_size([720.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Shin guard editor",
        native_options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc, config)))),
    )
}
