//! Field boundary geometry for the four supported shape families.
//!
//! Purpose
//! - Turn a handful of operator measurements into a closed ring (`Polygon2`) in a
//!   local frame whose lower-left reference corner sits at the origin.
//! - Dispatch on a tagged `ShapeParams` value; no event or form state leaks in here.
//!
//! Conventions
//! - Rings start at `(0,0)` for polygons and at angle 0 for the circle, and repeat
//!   the first point at the end.
//! - Polygons are counterclockwise, so `signed_area` is non-negative.
//! - The circle is centered at `(r, r)`, not at the origin. Renderers rely on the
//!   lower-left anchored frame.
//!
//! Code cross-refs: `geom::Polygon2`, `area::area`, `cfg::CIRCLE_SAMPLES`

mod generate;
mod params;

pub use generate::{generate, generate_kind};
pub(crate) use generate::rectangle;
pub use params::{ShapeKind, ShapeParams};
