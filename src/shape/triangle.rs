use crate::color::BLUE;
use crate::geometry::{self, Point};
use crate::surface::{Brush, FillScope, Surface};

use super::Shape;

/// A triangle given by its three vertices, filled blue.
///
/// The outline is an open path `v0 → v1 → v2`: unlike the filled rendering, it
/// does not draw the edge from `v2` back to `v0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Triangle {
    points: [Point; 3],
}

impl Triangle {
    /// Creates a triangle from its vertices, in drawing order.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Triangle {
            points: [p1, p2, p3],
        }
    }

    /// The vertices, in drawing order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.points
    }

    /// The truncated average of the vertices, used as rotation pivot.
    #[inline]
    pub fn centroid(&self) -> Point {
        geometry::centroid(&self.points)
    }
}

impl Shape for Triangle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.polyline(&self.points);
    }

    fn draw_filled(&self, surface: &mut dyn Surface) {
        let mut scope = FillScope::select(surface, Brush::Solid(BLUE));
        scope.polygon(&self.points);
    }

    fn move_figure(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn rotate(&mut self, angle: f64) {
        let center = self.centroid();
        for p in &mut self.points {
            *p = geometry::rotate_point(*p, center, angle);
        }
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}
