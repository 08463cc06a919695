//! The window, and things to handle the event loop and repaints.

mod canvas;
mod frame_surface;
mod window;

pub use canvas::WgpuCanvas;
pub use frame_surface::FrameSurface;
pub use window::{run, ShapeWindow};
