// benches/clip_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use segment_clip::{
    clip_batch, Clipper, ConvexClipper, Point2, RectClipper, Rectangle, SceneGenerator, Segment,
};

const NUM_BENCH_SEGMENTS: usize = 1000;

fn canvas() -> Rectangle {
    Rectangle::from_corners(Point2::ORIGIN, Point2::new(1080.0, 720.0))
}

fn create_segments(generator: &mut SceneGenerator) -> Vec<Segment> {
    generator.segments_in(&canvas(), NUM_BENCH_SEGMENTS)
}

fn clip_benchmark_fn(c: &mut Criterion) {
    let mut generator = SceneGenerator::new(0xC11F);
    let segments = create_segments(&mut generator);

    let rect_clipper = RectClipper::new(Rectangle::from_bounds(270.0, 810.0, 180.0, 540.0));
    let center = Point2::new(540.0, 360.0);

    let mut group = c.benchmark_group("ClipOperations");

    group.bench_function("rect_single_segment_cycle", |b| {
        let mut segment_iter = segments.iter().cycle();
        b.iter(|| {
            let segment = *segment_iter.next().unwrap();
            rect_clipper.clip(black_box(segment))
        })
    });

    for sides in [3usize, 8, 16] {
        let polygon = generator.convex_polygon(center, 240.0, sides);
        let convex_clipper = ConvexClipper::new(&polygon).unwrap();

        group.bench_function(format!("convex_{sides}_single_segment_cycle"), |b| {
            let mut segment_iter = segments.iter().cycle();
            b.iter(|| {
                let segment = *segment_iter.next().unwrap();
                convex_clipper.clip(black_box(segment))
            })
        });

        group.bench_function(format!("convex_{sides}_build_clipper"), |b| {
            b.iter(|| ConvexClipper::new(black_box(&polygon)))
        });
    }

    group.bench_function("rect_batch_1000", |b| {
        b.iter(|| clip_batch(black_box(&rect_clipper), black_box(&segments)))
    });

    group.finish();
}

criterion_group!(benches, clip_benchmark_fn);
criterion_main!(benches);
