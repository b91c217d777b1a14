pub mod resize_handle;

pub use resize_handle::{Handle, paint_handle};
