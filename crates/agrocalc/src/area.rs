//! Closed-form field areas.
//!
//! Shares `ShapeParams` (and its validation) with the boundary generator, so the area
//! shown next to a drawing always describes the same measurements.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::cfg::M2_PER_HECTARE;
use crate::error::{non_negative, Result};
use crate::shape::ShapeParams;

/// Area in square meters and hectares.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    pub area_m2: f64,
    pub area_hectare: f64,
}

impl AreaResult {
    #[inline]
    pub fn from_m2(area_m2: f64) -> Self {
        Self {
            area_m2,
            area_hectare: area_m2 / M2_PER_HECTARE,
        }
    }
}

/// Exact area of the shape described by `params` (the circle uses π, not the sampled ring).
pub fn area(params: &ShapeParams) -> Result<AreaResult> {
    params.validate()?;
    let m2 = match *params {
        ShapeParams::Rectangular { length_m, width_m } => length_m * width_m,
        ShapeParams::Triangular { base_m, height_m } => base_m * height_m / 2.0,
        ShapeParams::Circular { radius_m } => PI * radius_m * radius_m,
        ShapeParams::Trapezoidal {
            longer_base_m,
            shorter_base_m,
            height_m,
        } => (longer_base_m + shorter_base_m) * height_m / 2.0,
    };
    Ok(AreaResult::from_m2(m2))
}

/// Whole plants for `area_hectare` at `plants_per_hectare` (truncated).
pub fn plant_count(area_hectare: f64, plants_per_hectare: f64) -> Result<u64> {
    let a = non_negative("area_hectare", area_hectare)?;
    let d = non_negative("plants_per_hectare", plants_per_hectare)?;
    Ok((a * d).floor() as u64)
}
