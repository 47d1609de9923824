// src/main.rs

use clap::{Parser, ValueEnum};
use segment_clip::{
    clip_batch, ClipError, ClipRegion, ConvexClipper, Point2, RectClipper, Rectangle,
    SceneGenerator,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RegionKind {
    /// Axis-aligned rectangle (Cohen-Sutherland)
    Rect,
    /// Convex polygon (Cyrus-Beck)
    Convex,
}

/// Clips a random set of segments against a random clip region.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of random segments
    #[arg(short, long, default_value_t = 100)]
    count: usize,
    /// Canvas width; segments are generated inside the canvas
    #[arg(long, default_value_t = 1080.0)]
    width: f32,
    /// Canvas height
    #[arg(long, default_value_t = 720.0)]
    height: f32,
    /// Shape of the clip region
    #[arg(short, long, value_enum, default_value_t = RegionKind::Rect)]
    region: RegionKind,
    /// Vertex count of the convex region
    #[arg(long, default_value_t = 6)]
    sides: usize,
    /// RNG seed for a reproducible scene
    #[arg(short, long)]
    seed: Option<u64>,
}

fn build_region(args: &Args, generator: &mut SceneGenerator, canvas: &Rectangle) -> Result<ClipRegion, ClipError> {
    match args.region {
        RegionKind::Rect => {
            let rect = generator.rectangle_in(canvas);
            log::info!(
                "clip rectangle l={} r={} b={} t={}",
                rect.left(),
                rect.right(),
                rect.bottom(),
                rect.top()
            );
            Ok(RectClipper::new(rect).into())
        }
        RegionKind::Convex => {
            let center = Point2::new(canvas.width() / 2.0, canvas.height() / 2.0);
            let radius = canvas.width().min(canvas.height()) / 3.0;
            let polygon = generator.convex_polygon(center, radius, args.sides);
            log::info!("clip polygon {:?}", polygon.vertices());
            Ok(ConvexClipper::new(&polygon)?.into())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut generator = match args.seed {
        Some(seed) => SceneGenerator::new(seed),
        None => SceneGenerator::from_entropy(),
    };
    let canvas = Rectangle::from_corners(Point2::ORIGIN, Point2::new(args.width, args.height));

    let region = build_region(&args, &mut generator, &canvas)?;
    let segments = generator.segments_in(&canvas, args.count);
    let clipped = clip_batch(&region, &segments);

    let visible = clipped.iter().filter(|c| c.is_some()).count();
    log::info!(
        "{} segments, {} visible, {} rejected",
        segments.len(),
        visible,
        segments.len() - visible
    );

    for (segment, result) in segments.iter().zip(&clipped) {
        match result {
            Some(c) => println!(
                "({:.2}, {:.2}) -> ({:.2}, {:.2})  =>  ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                segment.start.x, segment.start.y, segment.end.x, segment.end.y,
                c.start.x, c.start.y, c.end.x, c.end.y
            ),
            None => println!(
                "({:.2}, {:.2}) -> ({:.2}, {:.2})  =>  outside",
                segment.start.x, segment.start.y, segment.end.x, segment.end.y
            ),
        }
    }

    Ok(())
}
