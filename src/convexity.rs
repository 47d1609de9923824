// src/convexity.rs

use std::f32::consts::PI;

use glam::Vec2;

use crate::config::ClipConfig;
use crate::error::RegionDefect;
use crate::geometry::ConvexPolygon;

/// Rotational direction in which a polygon's vertices are listed (y up).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// +1 for counter-clockwise, -1 for clockwise.
    pub fn sign(self) -> f32 {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
        }
    }
}

pub fn is_convex(polygon: &ConvexPolygon) -> bool {
    check_convexity(polygon, &ClipConfig::default()).is_ok()
}

/// Checks that `polygon` is simple and convex and returns its winding.
///
/// Walks every vertex and looks at the cross product of the incoming and
/// outgoing edges. The first turn that is not collinear fixes the winding;
/// any later turn of the opposite sign is a reflex vertex. Collinear vertices
/// are tolerated as long as the boundary does not double back on itself.
/// Finally the turning angles must add up to a single revolution, which
/// rejects star shapes whose turns all agree in sign.
pub fn check_convexity(
    polygon: &ConvexPolygon,
    config: &ClipConfig,
) -> Result<Winding, RegionDefect> {
    let n = polygon.count();
    if n < 3 {
        return Err(RegionDefect::TooFewVertices(n));
    }
    if let Some(i) = polygon.vertices().iter().position(|p| !p.is_finite()) {
        return Err(RegionDefect::NonFiniteVertex(i));
    }

    let mut winding: Option<Winding> = None;
    let mut fold_back: Option<usize> = None;
    let mut total_turn = 0.0f32;

    for i in 0..n {
        let prev: Vec2 = polygon.vertex(i + n - 1).into();
        let current: Vec2 = polygon.vertex(i).into();
        let next: Vec2 = polygon.vertex(i + 1).into();

        let incoming = current - prev;
        let outgoing = next - current;
        let scale = incoming.length() * outgoing.length();
        if scale == 0.0 {
            // Repeated vertex, no turn to measure.
            continue;
        }

        let cross = incoming.perp_dot(outgoing);
        let dot = incoming.dot(outgoing);

        if cross.abs() <= config.collinear_tolerance * scale {
            if dot < 0.0 && fold_back.is_none() {
                // Boundary folds back along itself.
                fold_back = Some(i);
            }
            continue;
        }

        let turn = if cross > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        };
        match winding {
            None => winding = Some(turn),
            Some(reference) if reference != turn => {
                return Err(RegionDefect::ReflexVertex(i));
            }
            Some(_) => {}
        }
        total_turn += cross.atan2(dot);
    }

    // All collinear: a fold-back is just the closing edge running home.
    let winding = winding.ok_or(RegionDefect::ZeroArea)?;
    if let Some(i) = fold_back {
        return Err(RegionDefect::ReflexVertex(i));
    }

    // A simple convex boundary turns through exactly one revolution.
    if total_turn.abs() > 3.0 * PI {
        return Err(RegionDefect::SelfIntersecting);
    }

    Ok(winding)
}
