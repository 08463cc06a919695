use crate::color::LIME;
use crate::geometry::{self, Point};
use crate::surface::{Brush, FillScope, Surface};

use super::Shape;

/// A square rotated about its center, filled green.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Square {
    center: Point,
    side_length: i32,
    // Accumulated, never wrapped.
    angle: f64,
}

impl Square {
    /// Creates an axis-aligned square. The side length is not checked.
    pub fn new(center_x: i32, center_y: i32, side_length: i32) -> Self {
        Square {
            center: Point::new(center_x, center_y),
            side_length,
            angle: 0.0,
        }
    }

    /// The center of the square.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The side length given at construction.
    #[inline]
    pub fn side_length(&self) -> i32 {
        self.side_length
    }

    /// The total rotation applied so far, in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The four corners of the square at its current angle.
    ///
    /// The half-diagonal offsets `(+h, +h)`, `(+h, -h)`, `(-h, -h)` and `(-h, +h)`,
    /// with `h = side_length / 2`, are rotated and truncated before being added to
    /// the center.
    pub fn vertices(&self) -> [Point; 4] {
        let h = f64::from(self.side_length / 2);
        [(h, h), (h, -h), (-h, -h), (-h, h)]
            .map(|(dx, dy)| self.center + geometry::rotate_offset(dx, dy, self.angle))
    }
}

impl Shape for Square {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.polygon(&self.vertices());
    }

    fn draw_filled(&self, surface: &mut dyn Surface) {
        let mut scope = FillScope::select(surface, Brush::Solid(LIME));
        self.draw(&mut *scope);
    }

    fn move_figure(&mut self, dx: i32, dy: i32) {
        self.center = self.center.translated(dx, dy);
    }

    fn rotate(&mut self, angle: f64) {
        self.angle += angle;
    }

    fn name(&self) -> &'static str {
        "square"
    }
}
