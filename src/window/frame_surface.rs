//! A [`Surface`] that tessellates what is drawn on it for the GPU.

use glamx::Vec2;

use crate::geometry::{Point, Rect};
use crate::renderer::tessellation::{self, to_vec2};
use crate::renderer::PlanarBatch;
use crate::surface::{Brush, Pen, Surface};

/// The drawing surface handed to shapes during a repaint.
///
/// Every call is turned into triangles appended to a [`PlanarBatch`]: the fill
/// first, then the outline on top, the way GDI paints closed figures.
pub struct FrameSurface<'a> {
    batch: &'a mut PlanarBatch,
    pen: Pen,
    brush: Brush,
    ellipse_segments: u32,
}

impl<'a> FrameSurface<'a> {
    /// A surface appending to `batch`, with the stock white brush selected.
    pub fn new(batch: &'a mut PlanarBatch, pen: Pen, ellipse_segments: u32) -> Self {
        FrameSurface {
            batch,
            pen,
            brush: Brush::default(),
            ellipse_segments,
        }
    }

    fn fill_and_stroke(&mut self, points: &[Vec2]) {
        if let Some(color) = self.brush.color() {
            self.batch.fill_polygon(points, color);
        }
        self.batch
            .stroke_polyline(points, true, self.pen.color, self.pen.width);
    }
}

fn to_vec2s(points: &[Point]) -> Vec<Vec2> {
    points.iter().copied().map(to_vec2).collect()
}

impl Surface for FrameSurface<'_> {
    fn ellipse(&mut self, rect: Rect) {
        let points = tessellation::ellipse_points(rect, self.ellipse_segments);
        self.fill_and_stroke(&points);
    }

    fn polygon(&mut self, points: &[Point]) {
        self.fill_and_stroke(&to_vec2s(points));
    }

    fn polyline(&mut self, points: &[Point]) {
        self.batch.stroke_polyline(
            &to_vec2s(points),
            false,
            self.pen.color,
            self.pen.width,
        );
    }

    fn select_brush(&mut self, brush: Brush) -> Brush {
        std::mem::replace(&mut self.brush, brush)
    }
}
