// src/rect_clip.rs
//
// Cohen-Sutherland clipping against an axis-aligned rectangle.

use crate::clipper::Clipper;
use crate::config::ClipConfig;
use crate::geometry::{Point2, Rectangle, Segment};

pub const OUT_BOTTOM: u8 = 1 << 0;
pub const OUT_RIGHT: u8 = 1 << 1;
pub const OUT_TOP: u8 = 1 << 2;
pub const OUT_LEFT: u8 = 1 << 3;

/// Region code of `p`. Points on a boundary are inside.
pub fn outcode(p: &Point2, rect: &Rectangle) -> u8 {
    outcode_with_slack(p, rect, 0.0)
}

fn outcode_with_slack(p: &Point2, rect: &Rectangle, slack: f32) -> u8 {
    let mut code = 0;
    if p.y < rect.bottom() - slack {
        code |= OUT_BOTTOM;
    }
    if p.x > rect.right() + slack {
        code |= OUT_RIGHT;
    }
    if p.y > rect.top() + slack {
        code |= OUT_TOP;
    }
    if p.x < rect.left() - slack {
        code |= OUT_LEFT;
    }
    code
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectClipper {
    rect: Rectangle,
    config: ClipConfig,
}

impl RectClipper {
    pub fn new(rect: Rectangle) -> Self {
        Self::with_config(rect, ClipConfig::default())
    }

    pub fn with_config(rect: Rectangle, config: ClipConfig) -> Self {
        Self { rect, config }
    }

    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Moves `p` onto each boundary it violates, in the order left, top,
    /// right, bottom, sliding along the line with direction `delta`.
    fn push_to_boundary(&self, mut p: Point2, delta: Point2) -> Option<Point2> {
        let r = &self.rect;
        if p.x < r.left() {
            if delta.x == 0.0 {
                return None;
            }
            p.y += (r.left() - p.x) * delta.y / delta.x;
            p.x = r.left();
        }
        if p.y > r.top() {
            if delta.y == 0.0 {
                return None;
            }
            p.x += (r.top() - p.y) * delta.x / delta.y;
            p.y = r.top();
        }
        if p.x > r.right() {
            if delta.x == 0.0 {
                return None;
            }
            p.y += (r.right() - p.x) * delta.y / delta.x;
            p.x = r.right();
        }
        if p.y < r.bottom() {
            if delta.y == 0.0 {
                return None;
            }
            p.x += (r.bottom() - p.y) * delta.x / delta.y;
            p.y = r.bottom();
        }
        Some(p)
    }

    fn magnitude(&self, segment: &Segment) -> f32 {
        let r = &self.rect;
        [
            r.left(),
            r.right(),
            r.top(),
            r.bottom(),
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
        ]
        .iter()
        .fold(0.0f32, |acc, v| acc.max(v.abs()))
    }
}

impl Clipper for RectClipper {
    fn clip(&self, segment: Segment) -> Option<Segment> {
        // NaN fails every outcode comparison and would be trivially accepted.
        if !segment.is_finite() {
            log::debug!("non-finite segment {:?}", segment);
            return None;
        }

        let code_start = outcode(&segment.start, &self.rect);
        let code_end = outcode(&segment.end, &self.rect);

        if segment.is_degenerate() {
            log::debug!("degenerate segment at {:?}", segment.start);
        }
        if code_start == 0 && code_end == 0 {
            log::trace!("trivial accept {:?}", segment);
            return Some(segment);
        }
        if code_start & code_end != 0 {
            log::trace!("trivial reject {:?}", segment);
            return None;
        }
        // Equal codes are either both zero or share a bit, so a zero-length
        // segment never gets here.

        let delta = segment.direction();
        let start = if code_start != 0 {
            self.push_to_boundary(segment.start, delta)?
        } else {
            segment.start
        };
        let end = if code_end != 0 {
            self.push_to_boundary(segment.end, delta)?
        } else {
            segment.end
        };

        // A segment passing beside a corner gets pushed onto the boundary
        // lines but off the rectangle itself.
        let slack = self.config.boundary_slack(self.magnitude(&segment));
        if outcode_with_slack(&start, &self.rect, slack) != 0
            || outcode_with_slack(&end, &self.rect, slack) != 0
        {
            log::trace!("corner miss {:?}", segment);
            return None;
        }

        Some(Segment::new(self.clamp(start), self.clamp(end)))
    }
}

impl RectClipper {
    fn clamp(&self, p: Point2) -> Point2 {
        let r = &self.rect;
        Point2::new(
            p.x.clamp(r.left(), r.right()),
            p.y.clamp(r.bottom(), r.top()),
        )
    }
}

/// Clips `segment` to `rect` with the default tolerances.
pub fn clip_to_rect(segment: Segment, rect: Rectangle) -> Option<Segment> {
    RectClipper::new(rect).clip(segment)
}
