//! The collection of shapes owned by a window.

use crate::geometry::Point;
use crate::shape::{Circle, Shape, Square, Triangle};
use crate::surface::Surface;

/// An ordered, exclusively owned list of shapes.
///
/// The window handler owns one scene for its whole lifetime: it is filled once
/// when the window is created, painted on every repaint, and emptied when the
/// window closes.
#[derive(Debug, Default)]
pub struct ShapeScene {
    shapes: Vec<Box<dyn Shape>>,
}

impl ShapeScene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the scene with its circle, square and triangle, in that order.
    ///
    /// Does nothing if the scene already holds shapes.
    pub fn initialize(&mut self) {
        if !self.shapes.is_empty() {
            log::debug!("Scene already initialized with {} shapes.", self.shapes.len());
            return;
        }

        self.add(Circle::new(Point::new(100, 150), 75));
        self.add(Square::new(250, 150, 100));
        self.add(Triangle::new(
            Point::new(400, 50),
            Point::new(350, 200),
            Point::new(450, 200),
        ));

        log::info!("Scene initialized with {} shapes.", self.shapes.len());
    }

    fn add(&mut self, shape: impl Shape + 'static) {
        self.shapes.push(Box::new(shape));
    }

    /// Draws every shape filled, in collection order.
    pub fn paint(&self, surface: &mut dyn Surface) {
        for shape in &self.shapes {
            log::trace!("Painting {:?}", shape);
            shape.draw_filled(surface);
        }
    }

    /// Drops every shape.
    pub fn teardown(&mut self) {
        log::info!("Releasing {} shapes.", self.shapes.len());
        self.shapes.clear();
    }

    /// The number of shapes in the scene.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no shape.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes, in painting order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> {
        self.shapes.iter().map(|s| &**s)
    }

    /// The shapes, in painting order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Shape + 'static)> {
        self.shapes.iter_mut().map(|s| &mut **s)
    }
}
