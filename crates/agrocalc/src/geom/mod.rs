//! Plain 2D coordinate data handed to renderers.
//!
//! Purpose
//! - `Polygon2`: ordered boundary ring, first point repeated at the end.
//! - `Segment2`: open two-point line, used for planting rows.
//! - Shoelace area and bounding boxes, used as oracles and by renderers to size axes.
//!
//! Code cross-refs: `shape::generate`, `irrigation::layout`

mod serde_xy;
mod types;
mod util;

pub use types::{Polygon2, Segment2};
pub use util::{bounding_box, shoelace_signed_area};

#[cfg(test)]
mod tests;
