// src/clipper.rs

use crate::convex_clip::ConvexClipper;
use crate::geometry::Segment;
use crate::rect_clip::RectClipper;

/// A clip region that can cut a segment down to its visible part.
pub trait Clipper: Send + Sync {
    /// Returns the portion of `segment` inside the region, or `None` if
    /// nothing of it is visible. The result keeps the input's direction.
    fn clip(&self, segment: Segment) -> Option<Segment>;
}

/// Either kind of clip region, for callers that pick one at runtime.
#[derive(Clone, Debug)]
pub enum ClipRegion {
    Rect(RectClipper),
    Convex(ConvexClipper),
}

impl Clipper for ClipRegion {
    fn clip(&self, segment: Segment) -> Option<Segment> {
        match self {
            ClipRegion::Rect(clipper) => clipper.clip(segment),
            ClipRegion::Convex(clipper) => clipper.clip(segment),
        }
    }
}

impl From<RectClipper> for ClipRegion {
    fn from(clipper: RectClipper) -> Self {
        ClipRegion::Rect(clipper)
    }
}

impl From<ConvexClipper> for ClipRegion {
    fn from(clipper: ConvexClipper) -> Self {
        ClipRegion::Convex(clipper)
    }
}
