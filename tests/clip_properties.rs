// tests/clip_properties.rs

use approx::assert_abs_diff_eq;
use segment_clip::{
    clip_batch, clip_to_convex, clip_to_rect, ClipError, ClipRegion, Clipper, ConvexClipper,
    ConvexPolygon, Point2, RectClipper, Rectangle, RegionDefect, SceneGenerator, Segment,
};

const CANVAS: (f32, f32) = (1080.0, 720.0);
const EPS: f32 = 2e-2;

fn canvas() -> Rectangle {
    Rectangle::from_corners(Point2::ORIGIN, Point2::new(CANVAS.0, CANVAS.1))
}

fn assert_close(actual: Segment, expected: Segment, eps: f32) {
    assert_abs_diff_eq!(actual.start.x, expected.start.x, epsilon = eps);
    assert_abs_diff_eq!(actual.start.y, expected.start.y, epsilon = eps);
    assert_abs_diff_eq!(actual.end.x, expected.end.x, epsilon = eps);
    assert_abs_diff_eq!(actual.end.y, expected.end.y, epsilon = eps);
}

/// Distance from `p` to the infinite line through `s`.
fn distance_to_line(p: Point2, s: &Segment) -> f32 {
    let d = s.direction();
    (d.cross(&(p - s.start))).abs() / d.length()
}

#[test]
fn rectangle_scenarios() {
    let rect = Rectangle::from_bounds(0.0, 10.0, 0.0, 10.0);

    let through = clip_to_rect(Segment::from_coords(-5.0, 5.0, 15.0, 5.0), rect).unwrap();
    assert_close(through, Segment::from_coords(0.0, 5.0, 10.0, 5.0), 1e-5);

    let corner = clip_to_rect(Segment::from_coords(-5.0, -5.0, 5.0, 5.0), rect).unwrap();
    assert_close(corner, Segment::from_coords(0.0, 0.0, 5.0, 5.0), 1e-5);

    assert_eq!(
        clip_to_rect(Segment::from_coords(-3.0, -2.0, -1.0, 12.0), rect),
        None
    );
}

#[test]
fn polygon_scenarios() {
    let triangle = ConvexPolygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 10.0),
    ]);
    let clipped = clip_to_convex(Segment::from_coords(-5.0, 5.0, 15.0, 5.0), &triangle)
        .unwrap()
        .unwrap();
    assert_close(clipped, Segment::from_coords(2.5, 5.0, 7.5, 5.0), 1e-4);

    let notched = ConvexPolygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 5.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ]);
    let err = ConvexClipper::new(&notched).unwrap_err();
    assert!(matches!(
        err,
        ClipError::InvalidClipRegion(RegionDefect::ReflexVertex(_))
    ));
}

#[test]
fn rectangle_as_polygon_agrees_with_rect_clipper() {
    let mut generator = SceneGenerator::new(0x5eed);
    let canvas = canvas();

    for _ in 0..20 {
        let rect = generator.rectangle_in(&canvas);
        if rect.width() < 1.0 || rect.height() < 1.0 {
            continue;
        }
        let rect_clipper = RectClipper::new(rect);
        let convex_clipper = ConvexClipper::new(&rect.into()).unwrap();

        for segment in generator.segments_in(&canvas, 200) {
            match (rect_clipper.clip(segment), convex_clipper.clip(segment)) {
                (Some(a), Some(b)) => assert_close(a, b, 0.05),
                (None, None) => {}
                // Grazing contacts may land on either side of the tolerance.
                (Some(s), None) | (None, Some(s)) => assert!(s.length() < 0.05, "{:?}", s),
            }
        }
    }
}

#[test]
fn results_are_contained_and_on_the_input_line() {
    let mut generator = SceneGenerator::new(2024);
    let canvas = canvas();
    let center = Point2::new(CANVAS.0 / 2.0, CANVAS.1 / 2.0);

    let mut regions: Vec<ClipRegion> = Vec::new();
    for sides in [3, 4, 5, 8, 16] {
        let polygon = generator.convex_polygon(center, 240.0, sides);
        regions.push(ConvexClipper::new(&polygon).unwrap().into());
        regions.push(RectClipper::new(generator.rectangle_in(&canvas)).into());
    }

    let segments = generator.segments_in(&canvas, 500);
    for region in &regions {
        for (segment, clipped) in segments.iter().zip(clip_batch(region, &segments)) {
            let Some(clipped) = clipped else { continue };
            for p in [clipped.start, clipped.end] {
                assert!(distance_to_line(p, segment) < EPS);
                match region {
                    ClipRegion::Rect(r) => {
                        assert!(r.rect().contains_with_tolerance(&p, EPS), "{:?}", p)
                    }
                    ClipRegion::Convex(c) => assert!(c.contains(&p), "{:?}", p),
                }
            }
            if clipped.length() > EPS {
                assert!(clipped.direction().dot(&segment.direction()) > 0.0);
            }
        }
    }
}

#[test]
fn clipping_is_idempotent() {
    let mut generator = SceneGenerator::new(99);
    let canvas = canvas();
    let polygon = generator.convex_polygon(Point2::new(540.0, 360.0), 300.0, 7);
    let regions: [ClipRegion; 2] = [
        ConvexClipper::new(&polygon).unwrap().into(),
        RectClipper::new(Rectangle::from_bounds(200.0, 800.0, 100.0, 600.0)).into(),
    ];

    for region in &regions {
        for segment in generator.segments_in(&canvas, 300) {
            if let Some(once) = region.clip(segment) {
                let twice = region.clip(once).expect("clipped segment stays visible");
                assert_close(twice, once, 1e-3);
            }
        }
    }
}

#[test]
fn inside_segments_are_returned_exactly() {
    let polygon = SceneGenerator::new(3).convex_polygon(Point2::new(0.0, 0.0), 100.0, 9);
    let clipper = ConvexClipper::new(&polygon).unwrap();
    let rect = RectClipper::new(Rectangle::from_bounds(-50.0, 50.0, -50.0, 50.0));

    let s = Segment::from_coords(-20.5, 10.25, 30.0, -15.75);
    assert_eq!(clipper.clip(s), Some(s));
    assert_eq!(rect.clip(s), Some(s));
}

#[test]
fn degenerate_segments_are_points() {
    let polygon = SceneGenerator::new(5).convex_polygon(Point2::new(0.0, 0.0), 10.0, 5);
    let regions: [ClipRegion; 2] = [
        ConvexClipper::new(&polygon).unwrap().into(),
        RectClipper::new(Rectangle::from_bounds(-5.0, 5.0, -5.0, 5.0)).into(),
    ];
    let inside = Segment::from_coords(1.0, -1.0, 1.0, -1.0);
    let outside = Segment::from_coords(40.0, 40.0, 40.0, 40.0);

    for region in &regions {
        assert_eq!(region.clip(inside), Some(inside));
        assert_eq!(region.clip(outside), None);
    }
}

#[test]
fn batch_output_lines_up_with_input() {
    let mut generator = SceneGenerator::new(11);
    let canvas = canvas();
    let segments = generator.segments_in(&canvas, 1000);
    let clipper = RectClipper::new(Rectangle::from_bounds(100.0, 500.0, 100.0, 400.0));

    let batch = clip_batch(&clipper, &segments);
    assert_eq!(batch.len(), segments.len());
    for (segment, result) in segments.iter().zip(batch) {
        assert_eq!(result, clipper.clip(*segment));
    }
}
