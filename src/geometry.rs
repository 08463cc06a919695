//! Integer screen-space geometry shared by every shape.
//!
//! Coordinates are pixels with the origin at the top-left corner of the window
//! and the y axis pointing down. Rotations are computed in `f64` and the result
//! is truncated toward zero, so repeated small rotations drift: a shape rotated
//! many times by a small angle slowly walks and distorts. This is the expected
//! behavior of the integer representation and is kept as is.
//!
//! Coordinate arithmetic wraps on `i32` overflow instead of panicking, so any
//! integer input is accepted.

use std::ops::{Add, Sub};

/// A point with integer pixel coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate (grows downward).
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns this point translated by `(dx, dy)`.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The square of half-size `radius` centered at `center`.
    #[inline]
    pub const fn around(center: Point, radius: i32) -> Self {
        Rect::new(
            center.x.wrapping_sub(radius),
            center.y.wrapping_sub(radius),
            center.x.wrapping_add(radius),
            center.y.wrapping_add(radius),
        )
    }

    /// Width of the rectangle. Negative if `right < left`.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Height of the rectangle. Negative if `bottom < top`.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }
}

/// Rotates the offset `(dx, dy)` by `angle` radians and truncates the result.
///
/// Uses the standard rotation matrix `(dx·cos − dy·sin, dx·sin + dy·cos)`.
pub fn rotate_offset(dx: f64, dy: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new((dx * cos - dy * sin) as i32, (dx * sin + dy * cos) as i32)
}

/// Rotates `point` around `center` by `angle` radians.
///
/// The rotated offset is added to the center in floating point and only the
/// final coordinates are truncated.
pub fn rotate_point(point: Point, center: Point, angle: f64) -> Point {
    let dx = f64::from(point.x) - f64::from(center.x);
    let dy = f64::from(point.y) - f64::from(center.y);
    let (sin, cos) = angle.sin_cos();
    let x = f64::from(center.x) + (dx * cos - dy * sin);
    let y = f64::from(center.y) + (dx * sin + dy * cos);
    Point::new(x as i32, y as i32)
}

/// The truncated integer average of `points`.
///
/// Returns the origin for an empty slice. The sums are taken in `i64`, so the
/// average of any set of `i32` points is itself a valid `i32` point.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }

    let n = points.len() as i64;
    let (sx, sy) = points.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + i64::from(p.x), sy + i64::from(p.y))
    });
    Point::new((sx / n) as i32, (sy / n) as i32)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn zero_angle_rotation_is_exact() {
        let c = Point::new(400, 150);
        for p in [Point::new(400, 50), Point::new(350, 200), Point::new(-7, 3)] {
            assert_eq!(rotate_point(p, c, 0.0), p);
        }
    }

    #[test]
    fn quarter_turn_follows_the_rotation_matrix() {
        // (10, 0) -> (0, 10): positive angles turn +x toward +y.
        let p = rotate_point(Point::new(10, 0), Point::new(0, 0), FRAC_PI_2);
        assert_eq!(p, Point::new(0, 10));

        let p = rotate_point(Point::new(110, 50), Point::new(100, 50), PI);
        assert_eq!(p, Point::new(90, 50));
    }

    #[test]
    fn rotation_truncates_toward_zero() {
        // cos(pi/2) is ~6e-17, not zero.
        let p = rotate_offset(0.0, -10.0, FRAC_PI_2);
        assert_eq!(p, Point::new(10, 0));

        // 45 degrees: 10 * sqrt(2)/2 = 7.07.. -> 7
        let p = rotate_offset(10.0, 0.0, PI / 4.0);
        assert_eq!(p, Point::new(7, 7));

        let p = rotate_offset(-10.0, 0.0, PI / 4.0);
        assert_eq!(p, Point::new(-7, -7));
    }

    #[test]
    fn centroid_truncates() {
        let pts = [Point::new(400, 50), Point::new(350, 200), Point::new(450, 200)];
        assert_eq!(centroid(&pts), Point::new(400, 150));

        let pts = [Point::new(0, 0), Point::new(1, 1), Point::new(1, 0)];
        assert_eq!(centroid(&pts), Point::new(0, 0));

        assert_eq!(centroid(&[]), Point::default());
    }

    #[test]
    fn centroid_of_large_coordinates_does_not_overflow() {
        let pts = [
            Point::new(1_000_000_000, 0),
            Point::new(1_000_000_000, 10),
            Point::new(1_000_000_010, 0),
        ];
        assert_eq!(centroid(&pts), Point::new(1_000_000_003, 3));

        let pts = [Point::new(i32::MIN, i32::MAX); 3];
        assert_eq!(centroid(&pts), Point::new(i32::MIN, i32::MAX));
    }

    #[test]
    fn coordinate_arithmetic_wraps() {
        let p = Point::new(i32::MAX, 0).translated(1, -1);
        assert_eq!(p, Point::new(i32::MIN, -1));
        assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(i32::MAX, 0) + Point::new(1, 0), Point::new(i32::MIN, 0));

        let r = Rect::around(Point::new(i32::MAX, 0), 1);
        assert_eq!(r.right, i32::MIN);
        assert_eq!(r.left, i32::MAX - 1);

        assert_eq!(distance(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)), u32::MAX as f64);
    }

    #[test]
    fn rect_around_center() {
        let r = Rect::around(Point::new(100, 150), 75);
        assert_eq!(r, Rect::new(25, 75, 175, 225));
        assert_eq!(r.width(), 150);
        assert_eq!(r.height(), 150);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(1, 2).translated(-3, 5), Point::new(-2, 7));
    }
}
