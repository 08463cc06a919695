/*!
# shapedraw

Keep It Simple: a window painting a circle, a square and a triangle.

The interesting part is small. A [`Shape`](shape::Shape) knows how to outline
itself, fill itself, move and rotate; [`Circle`](shape::Circle),
[`Square`](shape::Square) and [`Triangle`](shape::Triangle) implement it. Shapes
paint into any [`Surface`](surface::Surface): the GPU-backed
[`FrameSurface`](window::FrameSurface) when running in a window, or a
[`RecordingSurface`](surface::RecordingSurface) that simply remembers what was
drawn.

```
use shapedraw::prelude::*;

let mut scene = ShapeScene::new();
scene.initialize();

let mut surface = RecordingSurface::new();
scene.paint(&mut surface);
assert_eq!(surface.drawings().count(), 3);
```

To open the window:

```no_run
use shapedraw::prelude::*;

fn main() -> Result<()> {
    shapedraw::window::run(WindowConfig::default())
}
```

Coordinates are integer pixels with the y axis pointing down. Rotations
truncate to integers after every call, so repeated small rotations make a
shape drift. This is expected.
*/
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]

pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod window;

pub mod prelude {
    pub use crate::color::*;
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::scene::*;
    pub use crate::shape::*;
    pub use crate::surface::*;
    pub use crate::window::*;
}
