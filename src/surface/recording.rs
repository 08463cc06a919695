use crate::geometry::{Point, Rect};

use super::{Brush, Surface};

/// A single call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An ellipse, with the brush selected when it was drawn.
    Ellipse { rect: Rect, brush: Brush },
    /// A closed polygon, with the brush selected when it was drawn.
    Polygon { points: Vec<Point>, brush: Brush },
    /// An open polyline. Polylines are never filled.
    Polyline { points: Vec<Point> },
    /// A brush selection.
    SelectBrush(Brush),
}

impl DrawCommand {
    /// The line segments this command strokes, in drawing order.
    ///
    /// Polygons include their closing edge, polylines do not. Ellipses and brush
    /// selections stroke no straight segment.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        match self {
            DrawCommand::Polygon { points, .. } if points.len() > 1 => {
                let mut segments: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
                segments.push((points[points.len() - 1], points[0]));
                segments
            }
            DrawCommand::Polyline { points } => {
                points.windows(2).map(|w| (w[0], w[1])).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// A surface that records what is drawn on it instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    brush: Brush,
}

impl RecordingSurface {
    /// A surface with the stock white brush selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with `brush` initially selected.
    pub fn with_brush(brush: Brush) -> Self {
        RecordingSurface {
            commands: Vec::new(),
            brush,
        }
    }

    /// Every command recorded so far, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The recorded commands that draw something, leaving out brush selections.
    pub fn drawings(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::SelectBrush(_)))
    }

    /// The currently selected brush.
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Forgets every recorded command. The selected brush is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn ellipse(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Ellipse {
            rect,
            brush: self.brush,
        });
    }

    fn polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            brush: self.brush,
        });
    }

    fn polyline(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
        });
    }

    fn select_brush(&mut self, brush: Brush) -> Brush {
        self.commands.push(DrawCommand::SelectBrush(brush));
        std::mem::replace(&mut self.brush, brush)
    }
}
