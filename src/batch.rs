// src/batch.rs

use crate::clipper::Clipper;
use crate::geometry::Segment;

/// Clips every segment against `clipper`. The output has the same length as
/// the input and `result[i]` belongs to `segments[i]`.
///
/// With the `parallel` feature the work is spread over the rayon pool; order
/// is preserved either way.
pub fn clip_batch<C: Clipper + ?Sized>(clipper: &C, segments: &[Segment]) -> Vec<Option<Segment>> {
    clip_all(clipper, segments)
}

#[cfg(feature = "parallel")]
fn clip_all<C: Clipper + ?Sized>(clipper: &C, segments: &[Segment]) -> Vec<Option<Segment>> {
    use rayon::prelude::*;

    segments.par_iter().map(|&s| clipper.clip(s)).collect()
}

#[cfg(not(feature = "parallel"))]
fn clip_all<C: Clipper + ?Sized>(clipper: &C, segments: &[Segment]) -> Vec<Option<Segment>> {
    segments.iter().map(|&s| clipper.clip(s)).collect()
}

/// Only the visible results, each paired with the index of its input segment.
pub fn clip_batch_visible<C: Clipper + ?Sized>(
    clipper: &C,
    segments: &[Segment],
) -> Vec<(usize, Segment)> {
    clip_batch(clipper, segments)
        .into_iter()
        .enumerate()
        .filter_map(|(i, clipped)| clipped.map(|s| (i, s)))
        .collect()
}
