//! The drawing surface shapes paint into.
//!
//! A [`Surface`] has a fixed [`Pen`] used for every outline and a selectable
//! [`Brush`] used to fill closed figures. Shapes never keep a reference to a
//! surface; one is lent to them for the duration of a draw call.

use std::ops::{Deref, DerefMut};

use crate::color::{self, Color};
use crate::geometry::{Point, Rect};

pub use self::recording::{DrawCommand, RecordingSurface};

mod recording;

/// How closed figures are filled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Brush {
    /// Closed figures are only outlined.
    Hollow,
    /// Closed figures are filled with a solid color.
    Solid(Color),
}

impl Brush {
    /// The fill color, if any.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match *self {
            Brush::Hollow => None,
            Brush::Solid(color) => Some(color),
        }
    }
}

impl Default for Brush {
    /// The stock white brush a fresh surface starts with.
    fn default() -> Self {
        Brush::Solid(color::WHITE)
    }
}

/// How outlines are stroked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Pen {
            color: color::BLACK,
            width: 1.0,
        }
    }
}

/// Target of every shape drawing operation.
pub trait Surface {
    /// Draws the ellipse inscribed in `rect`, outlined with the pen and filled with the
    /// current brush.
    fn ellipse(&mut self, rect: Rect);

    /// Draws a closed polygon through `points`, outlined with the pen (including the
    /// closing edge from the last point back to the first) and filled with the current
    /// brush.
    fn polygon(&mut self, points: &[Point]);

    /// Strokes an open path through `points` with the pen. The path is never closed and
    /// never filled.
    fn polyline(&mut self, points: &[Point]);

    /// Selects `brush` for subsequent fills and returns the brush that was selected
    /// before.
    fn select_brush(&mut self, brush: Brush) -> Brush;
}

/// Selects a brush on a surface for as long as the scope lives.
///
/// The previously selected brush is restored when the scope is dropped, whatever
/// the exit path.
///
/// # Example
/// ```
/// use shapedraw::color::RED;
/// use shapedraw::geometry::Rect;
/// use shapedraw::surface::{Brush, FillScope, RecordingSurface, Surface};
///
/// let mut surface = RecordingSurface::new();
/// {
///     let mut scope = FillScope::select(&mut surface, Brush::Solid(RED));
///     scope.ellipse(Rect::new(0, 0, 10, 10));
/// }
/// assert_eq!(surface.brush(), Brush::default());
/// ```
pub struct FillScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    previous: Brush,
}

impl<'a, S: Surface + ?Sized> FillScope<'a, S> {
    /// Selects `brush` on `surface`, remembering the brush it replaces.
    pub fn select(surface: &'a mut S, brush: Brush) -> Self {
        let previous = surface.select_brush(brush);
        FillScope { surface, previous }
    }

    /// The brush that will be restored on drop.
    #[inline]
    pub fn previous(&self) -> Brush {
        self.previous
    }
}

impl<S: Surface + ?Sized> Deref for FillScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for FillScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for FillScope<'_, S> {
    fn drop(&mut self) {
        let _ = self.surface.select_brush(self.previous);
    }
}
