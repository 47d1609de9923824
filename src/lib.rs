// src/lib.rs

//! 2D line-segment clipping.
//!
//! Segments are clipped either against an axis-aligned [`Rectangle`]
//! (Cohen-Sutherland, [`RectClipper`]) or against a convex polygon
//! (Cyrus-Beck, [`ConvexClipper`]). Both implement [`Clipper`], so a caller
//! can pick a region at runtime and clip whole batches with [`clip_batch`].
//!
//! ```
//! use segment_clip::{clip_to_rect, Point2, Rectangle, Segment};
//!
//! let rect = Rectangle::from_corners(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
//! let visible = clip_to_rect(Segment::from_coords(-5.0, 5.0, 15.0, 5.0), rect);
//! assert_eq!(visible, Some(Segment::from_coords(0.0, 5.0, 10.0, 5.0)));
//! ```

pub mod batch;
pub mod clipper;
pub mod config;
pub mod convex_clip;
pub mod convexity;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod rect_clip;

pub use batch::{clip_batch, clip_batch_visible};
pub use clipper::{ClipRegion, Clipper};
pub use config::ClipConfig;
pub use convex_clip::{clip_to_convex, ConvexClipper};
pub use convexity::{check_convexity, is_convex, Winding};
pub use error::{ClipError, RegionDefect};
pub use generator::SceneGenerator;
pub use geometry::{segments_as_floats, ConvexPolygon, Point2, Rectangle, Segment};
pub use rect_clip::{clip_to_rect, outcode, RectClipper};
