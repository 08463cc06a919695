use shapedraw::geometry::{centroid, distance, Point, Rect};
use shapedraw::prelude::{
    Brush, Circle, DrawCommand, RecordingSurface, Shape, ShapeScene, Square, Triangle, BLUE,
    LIME, RED,
};
use std::f64::consts::PI;

const ANGLES: [f64; 8] = [0.3, 1.0, -2.0, PI / 7.0, 3.0, 0.01, -0.7, 5.5];

fn triangles() -> Vec<Triangle> {
    vec![
        Triangle::new(Point::new(400, 50), Point::new(350, 200), Point::new(450, 200)),
        Triangle::new(Point::new(0, 0), Point::new(37, -12), Point::new(-5, 81)),
        Triangle::new(
            Point::new(-100, -100),
            Point::new(-40, -130),
            Point::new(-70, -20),
        ),
    ]
}

fn assert_close(a: &[Point], b: &[Point], tolerance: i32) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert!(
            (p.x - q.x).abs() <= tolerance && (p.y - q.y).abs() <= tolerance,
            "{:?} and {:?} differ by more than {}",
            a,
            b,
            tolerance
        );
    }
}

fn side_lengths(t: &Triangle) -> [f64; 3] {
    let [a, b, c] = t.vertices();
    [distance(a, b), distance(b, c), distance(c, a)]
}

#[test]
fn circle_bounding_ellipse() {
    let circle = Circle::new(Point::new(100, 150), 75);
    let mut surface = RecordingSurface::new();
    circle.draw(&mut surface);

    assert_eq!(
        surface.commands(),
        &[DrawCommand::Ellipse {
            rect: Rect::new(25, 75, 175, 225),
            brush: Brush::default(),
        }]
    );
}

#[test]
fn square_initial_vertices() {
    let square = Square::new(250, 150, 100);
    assert_eq!(square.angle(), 0.0);
    assert_eq!(
        square.vertices(),
        [
            Point::new(300, 200),
            Point::new(300, 100),
            Point::new(200, 100),
            Point::new(200, 200),
        ]
    );
}

#[test]
fn triangle_zero_rotation_is_exact() {
    let mut t = Triangle::new(Point::new(400, 50), Point::new(350, 200), Point::new(450, 200));
    t.rotate(0.0);
    assert_eq!(
        t.vertices(),
        [Point::new(400, 50), Point::new(350, 200), Point::new(450, 200)]
    );
}

#[test]
fn move_translates_exactly_and_keeps_dimensions() {
    for (dx, dy) in [(0, 0), (13, -7), (-250, 400), (1, 1)] {
        let mut circle = Circle::new(Point::new(100, 150), 75);
        circle.move_figure(dx, dy);
        assert_eq!(circle.center(), Point::new(100 + dx, 150 + dy));
        assert_eq!(circle.radius(), 75);

        let mut square = Square::new(250, 150, 100);
        square.rotate(0.4);
        let before = square.vertices();
        square.move_figure(dx, dy);
        assert_eq!(square.center(), Point::new(250 + dx, 150 + dy));
        assert_eq!(square.side_length(), 100);
        let moved: Vec<_> = before.iter().map(|p| p.translated(dx, dy)).collect();
        assert_eq!(square.vertices().to_vec(), moved);

        for mut t in triangles() {
            let before = t.vertices();
            let sides = side_lengths(&t);
            t.move_figure(dx, dy);
            let moved: Vec<_> = before.iter().map(|p| p.translated(dx, dy)).collect();
            assert_eq!(t.vertices().to_vec(), moved);
            assert_eq!(side_lengths(&t), sides);
        }
    }
}

#[test]
fn circle_rotation_is_a_no_op() {
    let mut circle = Circle::new(Point::new(100, 150), 75);
    for angle in ANGLES {
        circle.rotate(angle);
        assert_eq!(circle.center(), Point::new(100, 150));
        assert_eq!(circle.radius(), 75);
    }
}

#[test]
fn square_rotation_is_additive() {
    for (a, b) in [(0.3, 0.4), (1.0, -2.5), (PI, PI), (0.01, 5.5)] {
        let mut twice = Square::new(250, 150, 100);
        twice.rotate(a);
        twice.rotate(b);

        let mut once = Square::new(250, 150, 100);
        once.rotate(a + b);

        assert_close(&twice.vertices(), &once.vertices(), 1);
    }
}

#[test]
fn triangle_rotation_keeps_centroid_and_sides() {
    for t in triangles() {
        for angle in ANGLES {
            let mut rotated = t;
            rotated.rotate(angle);

            let (c0, c1) = (t.centroid(), rotated.centroid());
            assert!((c0.x - c1.x).abs() <= 2 && (c0.y - c1.y).abs() <= 2);
            assert_eq!(c0, centroid(&t.vertices()));

            for (before, after) in side_lengths(&t).iter().zip(side_lengths(&rotated)) {
                assert!((before - after).abs() <= 3.0, "{} vs {}", before, after);
            }
        }
    }
}

#[test]
fn rotating_back_drifts_by_a_bounded_amount() {
    for angle in ANGLES {
        for t in triangles() {
            let mut r = t;
            r.rotate(angle);
            r.rotate(-angle);
            assert_close(&r.vertices(), &t.vertices(), 4);
        }

        let mut square = Square::new(250, 150, 100);
        square.rotate(angle);
        square.rotate(-angle);
        assert_close(&square.vertices(), &Square::new(250, 150, 100).vertices(), 1);

        let mut circle = Circle::new(Point::new(100, 150), 75);
        circle.rotate(angle);
        circle.rotate(-angle);
        assert_eq!(circle, Circle::new(Point::new(100, 150), 75));
    }
}

#[test]
fn many_small_rotations_drift_away_from_one_large_one() {
    let start = Triangle::new(Point::new(400, 50), Point::new(350, 200), Point::new(450, 200));

    let mut stepped = start;
    for _ in 0..100 {
        stepped.rotate(0.01);
    }
    let mut direct = start;
    direct.rotate(1.0);

    assert_ne!(stepped.vertices(), direct.vertices());
}

#[test]
fn triangle_outline_is_open_and_fill_is_closed() {
    let t = Triangle::new(Point::new(400, 50), Point::new(350, 200), Point::new(450, 200));
    let [v0, v1, v2] = t.vertices();

    let mut surface = RecordingSurface::new();
    t.draw(&mut surface);
    let outline = surface.commands()[0].segments();
    assert_eq!(outline, vec![(v0, v1), (v1, v2)]);
    assert!(!outline.contains(&(v2, v0)));

    let mut surface = RecordingSurface::new();
    t.draw_filled(&mut surface);
    let fill: Vec<_> = surface.drawings().flat_map(|c| c.segments()).collect();
    assert_eq!(fill, vec![(v0, v1), (v1, v2), (v2, v0)]);
}

#[test]
fn scene_paints_each_shape_filled_in_order() {
    let mut scene = ShapeScene::new();
    scene.initialize();

    let mut surface = RecordingSurface::new();
    scene.paint(&mut surface);

    let brushes: Vec<_> = surface
        .drawings()
        .map(|c| match c {
            DrawCommand::Ellipse { brush, .. } | DrawCommand::Polygon { brush, .. } => *brush,
            other => panic!("unexpected command {:?}", other),
        })
        .collect();
    assert_eq!(
        brushes,
        [Brush::Solid(RED), Brush::Solid(LIME), Brush::Solid(BLUE)]
    );
    assert_eq!(surface.brush(), Brush::default());

    // Each fill is bracketed by a selection and its restoration.
    let selections = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::SelectBrush(_)))
        .count();
    assert_eq!(selections, 6);
}

#[test]
fn extreme_moves_wrap_instead_of_panicking() {
    let mut circle = Circle::new(Point::new(100, 150), 75);
    circle.move_figure(i32::MAX, 0);
    assert_eq!(circle.center(), Point::new(100i32.wrapping_add(i32::MAX), 150));
    let mut surface = RecordingSurface::new();
    circle.draw_filled(&mut surface);
    assert_eq!(surface.drawings().count(), 1);

    let mut square = Square::new(250, 150, 100);
    square.move_figure(i32::MAX, i32::MIN);
    square.rotate(0.5);
    square.draw(&mut surface);

    let mut t = Triangle::new(Point::new(400, 50), Point::new(350, 200), Point::new(450, 200));
    t.move_figure(i32::MAX, 0);
    t.rotate(1.0);
    t.draw_filled(&mut surface);
    assert_eq!(surface.drawings().count(), 3);
}

#[test]
fn rotating_a_far_away_triangle_keeps_it_in_place() {
    let start = Triangle::new(
        Point::new(1_000_000_000, 0),
        Point::new(1_000_000_000, 10),
        Point::new(1_000_000_010, 0),
    );

    let mut t = start;
    t.rotate(0.0);
    assert_eq!(t.vertices(), start.vertices());

    t.rotate(PI / 2.0);
    let (c0, c1) = (start.centroid(), t.centroid());
    assert!((c0.x - c1.x).abs() <= 2 && (c0.y - c1.y).abs() <= 2);
    for (before, after) in side_lengths(&start).iter().zip(side_lengths(&t)) {
        assert!((before - after).abs() <= 3.0, "{} vs {}", before, after);
    }
}
