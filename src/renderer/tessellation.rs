//! Conversion of outlines and fills into triangles.
//!
//! Everything here works in pixel coordinates (origin top-left, y down).

use std::f32::consts::TAU;

use glamx::Vec2;

use crate::geometry::{Point, Rect};

/// A triangle, as three corners.
pub type Tri = [Vec2; 3];

/// Converts an integer point to the renderer's vertex position.
#[inline]
pub fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Approximates the ellipse inscribed in `rect` with a polygon of `segments` vertices.
///
/// At least three vertices are always produced. A degenerate rectangle yields
/// coincident points, which tessellate to nothing visible.
pub fn ellipse_points(rect: Rect, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    let cx = (rect.left as f32 + rect.right as f32) * 0.5;
    let cy = (rect.top as f32 + rect.bottom as f32) * 0.5;
    let rx = (rect.width() as f32 * 0.5).abs();
    let ry = (rect.height() as f32 * 0.5).abs();

    (0..segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * TAU;
            Vec2::new(cx + rx * t.cos(), cy + ry * t.sin())
        })
        .collect()
}

/// Triangulates a convex polygon as a fan around its first vertex.
///
/// Fewer than three points produce no triangle.
pub fn fan_triangles(points: &[Vec2]) -> Vec<Tri> {
    if points.len() < 3 {
        return Vec::new();
    }

    let p0 = points[0];
    points[1..]
        .windows(2)
        .map(|w| [p0, w[0], w[1]])
        .collect()
}

/// Expands every segment of a path into a quad of the given width.
///
/// When `closed` is set the segment from the last point back to the first is
/// included. Zero-length segments are skipped.
pub fn stroke_segments(points: &[Vec2], closed: bool, width: f32) -> Vec<Tri> {
    let mut tris = Vec::new();
    if points.len() < 2 {
        return tris;
    }

    let mut push_segment = |a: Vec2, b: Vec2| {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            return;
        }

        let half = width * 0.5;
        let n = Vec2::new(-dy / len * half, dx / len * half);
        let a0 = Vec2::new(a.x + n.x, a.y + n.y);
        let a1 = Vec2::new(a.x - n.x, a.y - n.y);
        let b0 = Vec2::new(b.x + n.x, b.y + n.y);
        let b1 = Vec2::new(b.x - n.x, b.y - n.y);
        tris.push([a0, b0, b1]);
        tris.push([a0, b1, a1]);
    };

    for w in points.windows(2) {
        push_segment(w[0], w[1]);
    }
    if closed && points.len() > 2 {
        push_segment(points[points.len() - 1], points[0]);
    }

    tris
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1.0e-3 && (a.y - b.y).abs() < 1.0e-3
    }

    #[test]
    fn ellipse_spans_its_box() {
        let pts = ellipse_points(Rect::new(25, 75, 175, 225), 4);
        assert_eq!(pts.len(), 4);
        assert!(approx(pts[0], Vec2::new(175.0, 150.0)));
        assert!(approx(pts[1], Vec2::new(100.0, 225.0)));
        assert!(approx(pts[2], Vec2::new(25.0, 150.0)));
        assert!(approx(pts[3], Vec2::new(100.0, 75.0)));
    }

    #[test]
    fn ellipse_has_at_least_three_points() {
        assert_eq!(ellipse_points(Rect::new(0, 0, 10, 10), 0).len(), 3);
    }

    #[test]
    fn fan_covers_convex_polygon() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let tris = fan_triangles(&square);
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1], [square[0], square[2], square[3]]);

        assert!(fan_triangles(&square[..2]).is_empty());
    }

    #[test]
    fn open_and_closed_strokes() {
        let tri = [
            Vec2::new(400.0, 50.0),
            Vec2::new(350.0, 200.0),
            Vec2::new(450.0, 200.0),
        ];
        assert_eq!(stroke_segments(&tri, false, 1.0).len(), 4);
        assert_eq!(stroke_segments(&tri, true, 1.0).len(), 6);
    }

    #[test]
    fn stroke_has_requested_width() {
        let tris = stroke_segments(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)], false, 2.0);
        assert_eq!(tris.len(), 2);
        let ys: Vec<f32> = tris.iter().flatten().map(|v| v.y).collect();
        assert!(ys.iter().all(|y| (y.abs() - 1.0).abs() < 1.0e-6));
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let p = Vec2::new(3.0, 3.0);
        assert!(stroke_segments(&[p, p, p], true, 1.0).is_empty());
        assert_eq!(to_vec2(Point::new(-2, 7)), Vec2::new(-2.0, 7.0));
    }
}
