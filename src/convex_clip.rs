// src/convex_clip.rs
//
// Cyrus-Beck clipping against a convex polygon.

use glam::Vec2;

use crate::clipper::Clipper;
use crate::config::ClipConfig;
use crate::convexity::{check_convexity, Winding};
use crate::error::{ClipError, Result};
use crate::geometry::{ConvexPolygon, Point2, Segment};

/// Half-plane bounding the region: points `p` with
/// `(p - point) . normal <= 0` are inside.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ClipEdge {
    point: Vec2,
    normal: Vec2,
}

impl ClipEdge {
    /// Signed distance of `p` from the edge line, positive outside.
    #[inline(always)]
    fn offset(&self, p: Vec2) -> f32 {
        (p - self.point).dot(self.normal)
    }
}

/// Clips segments against a validated convex polygon.
///
/// Construction checks convexity once and caches a unit outward normal per
/// edge, so one clipper can be reused for any number of segments.
#[derive(Clone, Debug)]
pub struct ConvexClipper {
    polygon: ConvexPolygon,
    winding: Winding,
    edges: Vec<ClipEdge>,
    extent: f32,
    config: ClipConfig,
}

impl ConvexClipper {
    pub fn new(polygon: &ConvexPolygon) -> Result<Self> {
        Self::with_config(polygon, ClipConfig::default())
    }

    pub fn with_config(polygon: &ConvexPolygon, config: ClipConfig) -> Result<Self> {
        let winding = check_convexity(polygon, &config).map_err(|defect| {
            log::debug!("rejecting clip polygon {:?}: {}", polygon.vertices(), defect);
            ClipError::InvalidClipRegion(defect)
        })?;

        // Outward normal is the edge perpendicular on the side away from the
        // interior: right of the edge for counter-clockwise polygons, left
        // for clockwise ones.
        let edges = polygon
            .edges()
            .filter_map(|(a, b)| {
                let edge = Vec2::from(b) - Vec2::from(a);
                let normal = (-edge.perp() * winding.sign()).try_normalize()?;
                Some(ClipEdge {
                    point: a.into(),
                    normal,
                })
            })
            .collect();

        let extent = polygon
            .vertices()
            .iter()
            .fold(0.0f32, |acc, p| acc.max(p.x.abs()).max(p.y.abs()));

        Ok(Self {
            polygon: polygon.clone(),
            winding,
            edges,
            extent,
            config,
        })
    }

    pub fn polygon(&self) -> &ConvexPolygon {
        &self.polygon
    }

    pub fn winding(&self) -> Winding {
        self.winding
    }

    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Unit outward normals, one per non-degenerate edge, in edge order.
    pub fn edge_normals(&self) -> impl Iterator<Item = Point2> + '_ {
        self.edges.iter().map(|edge| edge.normal.into())
    }

    /// Whether `p` lies inside or on the boundary, within the configured slack.
    pub fn contains(&self, p: &Point2) -> bool {
        let slack = self.slack_for(p.x.abs().max(p.y.abs()));
        let p = Vec2::from(*p);
        self.edges.iter().all(|edge| edge.offset(p) <= slack)
    }

    fn slack_for(&self, magnitude: f32) -> f32 {
        self.config.boundary_slack(self.extent.max(magnitude))
    }
}

impl Clipper for ConvexClipper {
    fn clip(&self, segment: Segment) -> Option<Segment> {
        if !segment.is_finite() {
            log::debug!("non-finite segment {:?}", segment);
            return None;
        }

        let start = Vec2::from(segment.start);
        let end = Vec2::from(segment.end);
        let direction = end - start;

        if segment.is_degenerate() {
            log::debug!("degenerate segment at {:?}", segment.start);
        }

        let magnitude = start.abs().max_element().max(end.abs().max_element());
        let slack = self.slack_for(magnitude);
        let length = direction.length();
        // Normals are unit length, so this bounds the sine of the angle
        // between the segment and the edge.
        let parallel_limit = self.config.parallel_tolerance * length;
        // Slack in parameter space; only used once a non-parallel edge is seen.
        let t_slack = if length > 0.0 { slack / length } else { 0.0 };

        let mut t_lower = 0.0f32;
        let mut t_upper = 1.0f32;

        for edge in &self.edges {
            let start_offset = edge.offset(start);
            let denom = direction.dot(edge.normal);

            if denom.abs() <= parallel_limit {
                // Parallel to this edge, so it only matters which side we are on.
                if start_offset.max(start_offset + denom) > slack {
                    log::trace!("parallel and outside {:?}", segment);
                    return None;
                }
                continue;
            }

            if denom < 0.0 {
                // Entering. Nothing to cut if the start is already inside.
                if start_offset <= slack {
                    continue;
                }
                t_lower = t_lower.max(-start_offset / denom);
            } else {
                // Exiting. Nothing to cut if the end is still inside.
                if start_offset + denom <= slack {
                    continue;
                }
                t_upper = t_upper.min(-start_offset / denom);
            }

            if t_lower - t_upper > t_slack {
                log::trace!("outside {:?}", segment);
                return None;
            }
        }

        if t_lower > t_upper {
            // Grazing contact within tolerance. The point must stay on the input.
            let t = ((t_lower + t_upper) / 2.0).clamp(0.0, 1.0);
            t_lower = t;
            t_upper = t;
        }

        Some(Segment::new(
            point_on(&segment, t_lower),
            point_on(&segment, t_upper),
        ))
    }
}

/// Point at `t`, returning the input endpoints exactly at the ends of the
/// range.
fn point_on(segment: &Segment, t: f32) -> Point2 {
    if t <= 0.0 {
        segment.start
    } else if t >= 1.0 {
        segment.end
    } else {
        segment.point_at(t)
    }
}

/// Validates `polygon` and clips `segment` against it with default tolerances.
///
/// For many segments against the same polygon, build a [`ConvexClipper`]
/// once instead.
pub fn clip_to_convex(segment: Segment, polygon: &ConvexPolygon) -> Result<Option<Segment>> {
    let clipper = ConvexClipper::new(polygon)?;
    Ok(clipper.clip(segment))
}
