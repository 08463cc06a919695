use crate::color::RED;
use crate::geometry::{Point, Rect};
use crate::surface::{Brush, FillScope, Surface};

use super::Shape;

/// A circle, filled red.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Creates a circle. The radius is not checked.
    pub fn new(center: Point, radius: i32) -> Self {
        Circle { center, radius }
    }

    /// The center of the circle.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius of the circle.
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The box the circle is inscribed in.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }
}

impl Shape for Circle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.ellipse(self.bounds());
    }

    fn draw_filled(&self, surface: &mut dyn Surface) {
        let mut scope = FillScope::select(surface, Brush::Solid(RED));
        self.draw(&mut *scope);
    }

    fn move_figure(&mut self, dx: i32, dy: i32) {
        self.center = self.center.translated(dx, dy);
    }

    // Rotationally symmetric.
    fn rotate(&mut self, _angle: f64) {}

    fn name(&self) -> &'static str {
        "circle"
    }
}
