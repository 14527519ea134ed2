//! Irrigation row layout and water volumes for a rectangular field.
//!
//! Model
//! - Row count comes from the crop's agronomic spacing: `floor(width / row_spacing)`.
//! - Rows are *drawn* evenly across the full width at `width / (count + 1)`, which in
//!   general differs from the agronomic spacing. Both values are reported.
//! - Each row runs the full field length along x.
//!
//! Code cross-refs: `crop::CropCatalog::row_spacing_m`, `shape::generate` (boundary ring)

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::MAX_ROWS;
use crate::error::{finite, non_negative, positive, CalcError, Result};
use crate::geom::{Polygon2, Segment2};
use crate::shape::rectangle;

/// Field extent in meters: `length_m` along x (row direction), `width_m` along y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDimensions {
    pub length_m: f64,
    pub width_m: f64,
}

impl FieldDimensions {
    pub fn new(length_m: f64, width_m: f64) -> Self {
        Self { length_m, width_m }
    }

    fn validate(&self) -> Result<()> {
        non_negative("length_m", self.length_m)?;
        non_negative("width_m", self.width_m)?;
        Ok(())
    }
}

/// Rows to draw plus the field outline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub row_count: usize,
    /// Agronomic spacing the count was derived from.
    pub row_spacing_m: f64,
    /// Spacing the rows are drawn at.
    pub placement_spacing_m: f64,
    pub rows: Vec<Segment2>,
    pub field_boundary: Polygon2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    pub volume_per_row_m3: f64,
    pub total_volume_m3: f64,
}

/// Layout and volumes from one set of inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrrigationResult {
    pub layout: RowLayout,
    pub volumes: VolumeResult,
}

/// `floor(width / row_spacing)`, rejecting non-positive spacing.
///
/// Counts above [`MAX_ROWS`] are rejected as `InvalidParameter` on `row_spacing_m`:
/// every row becomes a segment in memory, and no real field/crop pair gets close.
pub fn row_count(field: &FieldDimensions, row_spacing_m: f64) -> Result<usize> {
    field.validate()?;
    let spacing = positive("row_spacing_m", row_spacing_m)?;
    let count = (field.width_m / spacing).floor();
    if count > MAX_ROWS as f64 {
        return Err(CalcError::invalid(
            "row_spacing_m",
            format!("yields {count} rows, limit is {MAX_ROWS}"),
        ));
    }
    Ok(count as usize)
}

/// Rows and outline for `field` at the crop's `row_spacing_m`.
///
/// A spacing wider than the field yields zero rows, not an error. More than
/// [`MAX_ROWS`] rows (e.g. a 2 km wide field at 1 mm spacing) is an input error;
/// see [`row_count`].
pub fn layout(field: &FieldDimensions, row_spacing_m: f64) -> Result<RowLayout> {
    let count = row_count(field, row_spacing_m)?;
    let placement = field.width_m / (count as f64 + 1.0);
    let rows = (1..=count)
        .map(|i| {
            let y = i as f64 * placement;
            Segment2::new(Vector2::new(0.0, y), Vector2::new(field.length_m, y))
        })
        .collect();
    Ok(RowLayout {
        row_count: count,
        row_spacing_m,
        placement_spacing_m: placement,
        rows,
        field_boundary: rectangle(field.length_m, field.width_m),
    })
}

/// Per-row volume is `rate × field length`; total multiplies by `row_count`.
pub fn volumes(
    field: &FieldDimensions,
    row_count: usize,
    volume_rate_per_m: f64,
) -> Result<VolumeResult> {
    field.validate()?;
    let rate = finite("volume_rate_per_m", volume_rate_per_m)?;
    let per_row = rate * field.length_m;
    Ok(VolumeResult {
        volume_per_row_m3: per_row,
        total_volume_m3: per_row * row_count as f64,
    })
}

/// Layout plus volumes. All inputs are checked before anything is computed.
pub fn calculate(
    field: &FieldDimensions,
    row_spacing_m: f64,
    volume_rate_per_m: f64,
) -> Result<IrrigationResult> {
    finite("volume_rate_per_m", volume_rate_per_m)?;
    let layout = layout(field, row_spacing_m)?;
    let volumes = volumes(field, layout.row_count, volume_rate_per_m)?;
    Ok(IrrigationResult { layout, volumes })
}
