//! The shapes that can be painted on a [`Surface`](crate::surface::Surface).
//!
//! Every shape owns its geometry, knows how to outline and fill itself, and can
//! be translated and rotated in place. None of these operations can fail: any
//! coordinate, size or angle is accepted as is.

use std::fmt::Debug;

use crate::surface::Surface;

pub use self::circle::Circle;
pub use self::square::Square;
pub use self::triangle::Triangle;

mod circle;
mod square;
mod triangle;

/// A 2D figure drawable on a surface.
pub trait Shape: Debug {
    /// Strokes the outline of the shape with whatever pen and brush the surface
    /// currently has selected.
    fn draw(&self, surface: &mut dyn Surface);

    /// Draws the shape filled with its own color.
    ///
    /// The surface brush is changed for the duration of the call only; it is
    /// restored before returning.
    fn draw_filled(&self, surface: &mut dyn Surface);

    /// Translates every coordinate of the shape by `(dx, dy)`.
    fn move_figure(&mut self, dx: i32, dy: i32);

    /// Rotates the shape around its own center by `angle` radians.
    ///
    /// Positive angles turn the +x axis toward +y. With the y axis pointing down,
    /// this looks clockwise on screen.
    fn rotate(&mut self, angle: f64);

    /// A short human-readable name, used in logs.
    fn name(&self) -> &'static str {
        "shape"
    }
}
