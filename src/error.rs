// src/error.rs

use thiserror::Error;

/// Why a polygon cannot be used as a convex clip region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionDefect {
    /// Fewer than three vertices.
    TooFewVertices(usize),
    /// The vertex at this index has a NaN or infinite coordinate.
    NonFiniteVertex(usize),
    /// Every vertex is collinear (or coincident).
    ZeroArea,
    /// The turn at this vertex goes against the polygon's winding.
    ReflexVertex(usize),
    /// Turns agree in sign but the boundary wraps around more than once.
    SelfIntersecting,
}

impl std::fmt::Display for RegionDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionDefect::TooFewVertices(n) => write!(f, "{n} vertices, at least 3 required"),
            RegionDefect::NonFiniteVertex(i) => write!(f, "vertex {i} is not finite"),
            RegionDefect::ZeroArea => write!(f, "polygon has zero area"),
            RegionDefect::ReflexVertex(i) => write!(f, "vertex {i} is reflex"),
            RegionDefect::SelfIntersecting => write!(f, "polygon is self-intersecting"),
        }
    }
}

/// Errors that can occur while setting up a clip.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ClipError {
    /// The polygon is not a simple convex polygon. No clip is performed.
    #[error("invalid clip region: {0}")]
    InvalidClipRegion(RegionDefect),
}

pub type Result<T, E = ClipError> = std::result::Result<T, E>;
