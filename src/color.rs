//! Colors used to paint shapes.
//!
//! Components are RGBA `f32` values in the range [0.0, 1.0], the layout the
//! GPU vertex data expects.
//!
//! # Example
//! ```
//! use shapedraw::color::{self, Color};
//!
//! let c: [f32; 4] = color::to_array(color::BLUE);
//! assert_eq!(c, [0.0, 0.0, 1.0, 1.0]);
//! # let _: Color = color::WHITE;
//! ```

pub use rgb::Rgba;

/// The color type used throughout shapedraw. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// White (255, 255, 255)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Red (255, 0, 0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Lime (0, 255, 0) - CSS "lime", pure green
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Blue (0, 0, 255)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// The color as `[r, g, b, a]`, ready to be copied into a vertex.
#[inline]
pub fn to_array(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

/// The color as a wgpu clear color.
#[inline]
pub fn to_wgpu(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}
