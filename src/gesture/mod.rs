//! Tap, drag, pinch and resize sessions.

mod capture;
mod machine;
mod session;

pub use capture::{CaptureTracker, PointerCapture};
pub use machine::{GestureContext, GestureMachine, wheel_zoom};
pub use session::{ContactKind, GestureSession, TapTarget};
