//! Agronomic field calculators: boundary geometry, areas, NPK quantities, and
//! irrigation row layouts.
//!
//! Everything here is a pure function over small value types. Callers parse their
//! input into `ShapeParams` / `FieldDimensions`, call in, and hand the returned
//! coordinates to whatever renderer they own.
//!
//! Layout
//! - `shape`: closed boundary rings for rectangular, triangular, circular and
//!   trapezoidal fields.
//! - `irrigation`: row count, row segments, and water volumes.
//! - `area`, `fertilizer`: closed-form areas and NPK quantities.
//! - `crop`: catalog lookup that resolves row spacing and NPK rates by crop name.
//! - `geom`: coordinate containers and the shoelace oracle.

pub mod area;
pub mod cfg;
pub mod crop;
pub mod error;
pub mod fertilizer;
pub mod geom;
pub mod irrigation;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{CalcError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for callers.
pub mod prelude {
    pub use crate::area::{area, plant_count, AreaResult};
    pub use crate::crop::{CropCatalog, CropProfile};
    pub use crate::error::{CalcError, Result};
    pub use crate::fertilizer::{
        complete, per_linear_meter, quantity, FieldInputs, NpkQuantity, NpkRate,
    };
    pub use crate::geom::{Polygon2, Segment2};
    pub use crate::irrigation::{
        calculate, layout, row_count, volumes, FieldDimensions, IrrigationResult, RowLayout,
        VolumeResult,
    };
    pub use crate::shape::{generate, generate_kind, ShapeKind, ShapeParams};
    pub use nalgebra::Vector2 as Vec2;
}
