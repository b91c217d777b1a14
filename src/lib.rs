#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controls;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod geometry;
pub mod gesture;
pub mod id;
pub mod input;
pub mod layout;
pub mod panels;
pub mod renderer;
pub mod selection;
pub mod surface;
pub mod transform;
pub mod widgets;

pub use app::{EditorApp, Side};
pub use config::EngineConfig;
pub use controls::{ControlAction, Direction, ZoomDirection};
pub use error::{ConfigError, TransitionError};
pub use id::{ObjectId, SurfaceObject};
pub use input::{InputEvent, InputHandler, RouteOutcome};
pub use renderer::{ScreenPlacement, project};
pub use surface::{Readout, Surface};
pub use transform::{TransformModel, TransformState};
