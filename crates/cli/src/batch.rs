//! Batch areas for a table of fields (one row per field).
//!
//! Input columns: `name` (optional), `shape_kind`, and whichever measurement columns
//! the listed shapes need. Each row is computed independently; a bad row carries an
//! error message instead of numbers.

use agrocalc::area::area;
use agrocalc::shape::{ShapeKind, ShapeParams};
use anyhow::Result;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

const MEASUREMENTS: [&str; 7] = [
    "length_m",
    "width_m",
    "base_m",
    "height_m",
    "radius_m",
    "longer_base_m",
    "shorter_base_m",
];

pub fn read_fields(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .finish()?
        .collect()?;
    Ok(df)
}

/// Append `area_m2`, `area_hectare`, `error` columns to a fields table.
pub fn areas_frame(df: &DataFrame) -> Result<DataFrame> {
    let kinds = df.column("shape_kind")?.cast(&DataType::String)?;
    let kinds = kinds.str()?;
    let mut cols: HashMap<&str, Float64Chunked> = HashMap::new();
    for name in MEASUREMENTS {
        if let Ok(series) = df.column(name) {
            let cast = series.cast(&DataType::Float64)?;
            cols.insert(name, cast.f64()?.clone());
        }
    }

    let n = df.height();
    let mut m2 = Vec::with_capacity(n);
    let mut ha = Vec::with_capacity(n);
    let mut errors = Vec::with_capacity(n);
    for i in 0..n {
        let outcome = kinds
            .get(i)
            .unwrap_or("")
            .parse::<ShapeKind>()
            .and_then(|kind| {
                ShapeParams::from_fields(kind, |f| cols.get(f).and_then(|c| c.get(i)))
            })
            .and_then(|p| area(&p));
        match outcome {
            Ok(a) => {
                m2.push(Some(a.area_m2));
                ha.push(Some(a.area_hectare));
                errors.push(None);
            }
            Err(e) => {
                tracing::warn!(row = i, error = %e, "field skipped");
                m2.push(None);
                ha.push(None);
                errors.push(Some(e.to_string()));
            }
        }
    }
    let mut out = df.clone();
    out.with_column(Series::new("area_m2".into(), m2))?;
    out.with_column(Series::new("area_hectare".into(), ha))?;
    out.with_column(Series::new("error".into(), errors))?;
    Ok(out)
}
