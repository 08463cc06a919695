//! Structures responsible for turning shapes into GPU draw calls.

pub use self::planar_renderer::{PlanarBatch, PlanarRenderer, PlanarVertex};

mod planar_renderer;
pub mod tessellation;
