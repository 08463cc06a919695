//! Window settings.
//!
//! There is no configuration file, command-line flag or environment variable:
//! the binary runs with [`WindowConfig::default`], and library users build their
//! own value with the `with_*` methods.

use crate::color::{self, Color};
use crate::surface::Pen;

/// Settings of the shape window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Logical width of the window.
    pub width: u32,
    /// Logical height of the window.
    pub height: u32,
    /// Is vsync enabled?
    pub vsync: bool,
    /// Color the window is cleared to before shapes are painted.
    pub background: Color,
    /// Pen used for every outline.
    pub pen: Pen,
    /// Number of vertices used to approximate an ellipse.
    pub ellipse_segments: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Рисование фигур".to_string(),
            width: 500,
            height: 500,
            vsync: true,
            background: color::WHITE,
            pen: Pen::default(),
            ellipse_segments: 64,
        }
    }
}

impl WindowConfig {
    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the logical size of the window.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enables or disables vsync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the outline pen.
    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }

    /// Sets how many vertices approximate an ellipse. At least 3 are always used.
    pub fn with_ellipse_segments(mut self, segments: u32) -> Self {
        self.ellipse_segments = segments;
        self
    }
}
