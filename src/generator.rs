// src/generator.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{ConvexPolygon, Point2, Rectangle, Segment};

/// Random segments and clip regions, reproducible from a seed.
pub struct SceneGenerator {
    rng: StdRng,
}

impl SceneGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn point_in(&mut self, bounds: &Rectangle) -> Point2 {
        Point2::new(
            self.coordinate(bounds.left(), bounds.right()),
            self.coordinate(bounds.bottom(), bounds.top()),
        )
    }

    pub fn segment_in(&mut self, bounds: &Rectangle) -> Segment {
        Segment::new(self.point_in(bounds), self.point_in(bounds))
    }

    pub fn segments_in(&mut self, bounds: &Rectangle, count: usize) -> Vec<Segment> {
        (0..count).map(|_| self.segment_in(bounds)).collect()
    }

    /// Rectangle spanned by two random corners inside `bounds`.
    pub fn rectangle_in(&mut self, bounds: &Rectangle) -> Rectangle {
        Rectangle::from_corners(self.point_in(bounds), self.point_in(bounds))
    }

    /// Counter-clockwise convex polygon with `num_vertices` vertices on a circle
    /// of radius within 20% of `avg_radius`, at jittered angles.
    pub fn convex_polygon(
        &mut self,
        center: Point2,
        avg_radius: f32,
        num_vertices: usize,
    ) -> ConvexPolygon {
        let num_vertices = num_vertices.max(3);
        let step = 2.0 * std::f32::consts::PI / (num_vertices as f32);

        // Keeps neighbouring angles strictly increasing and within one turn.
        let max_perturbation = step * 0.3;
        let radius = self.rng.gen_range(avg_radius * 0.8..=avg_radius * 1.2);

        let points: Vec<Point2> = (0..num_vertices)
            .map(|i| {
                let angle = (i as f32) * step
                    + self.rng.gen_range(-max_perturbation..=max_perturbation);
                Point2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();

        ConvexPolygon::from_points(&points)
    }

    fn coordinate(&mut self, low: f32, high: f32) -> f32 {
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }
}
