// src/config.rs

pub const DEFAULT_COLLINEAR_TOLERANCE: f32 = 1e-6;
pub const DEFAULT_PARALLEL_TOLERANCE: f32 = 1e-6;
pub const DEFAULT_BOUNDARY_TOLERANCE: f32 = 1e-5;

/// Numeric tolerances shared by the clippers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipConfig {
    /// A turn whose cross product is below this fraction of the product of the
    /// two edge lengths counts as collinear rather than reflex.
    pub collinear_tolerance: f32,
    /// A segment is parallel to an edge when `|d . n| <= parallel_tolerance * |d|`
    /// for the edge's unit normal `n`, i.e. when the sine of the angle between
    /// them is below this value.
    pub parallel_tolerance: f32,
    /// Slack allowed when checking that a clipped endpoint lies on or inside
    /// the region, relative to the magnitude of the coordinates involved.
    pub boundary_tolerance: f32,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            collinear_tolerance: DEFAULT_COLLINEAR_TOLERANCE,
            parallel_tolerance: DEFAULT_PARALLEL_TOLERANCE,
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
        }
    }
}

impl ClipConfig {
    pub fn with_collinear_tolerance(mut self, tolerance: f32) -> Self {
        self.collinear_tolerance = tolerance.abs();
        self
    }

    pub fn with_parallel_tolerance(mut self, tolerance: f32) -> Self {
        self.parallel_tolerance = tolerance.abs();
        self
    }

    pub fn with_boundary_tolerance(mut self, tolerance: f32) -> Self {
        self.boundary_tolerance = tolerance.abs();
        self
    }

    /// Absolute boundary slack for coordinates of the given magnitude.
    pub fn boundary_slack(&self, magnitude: f32) -> f32 {
        self.boundary_tolerance * magnitude.abs().max(1.0)
    }
}
