//! Irrigation layout binding.

use crate::common::{map_calc_err, to_tuples};
use agrocalc::irrigation::{calculate, FieldDimensions};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Row layout and volumes as a dict:
/// `row_count`, `placement_spacing_m`, `volume_per_row_m3`, `total_volume_m3`,
/// `rows` (list of `[(x0, y), (x1, y)]`), `field` (ring).
#[pyfunction]
pub fn irrigation_layout(
    py: Python<'_>,
    length_m: f64,
    width_m: f64,
    row_spacing_m: f64,
    volume_rate_per_m: f64,
) -> PyResult<PyObject> {
    let res = calculate(
        &FieldDimensions::new(length_m, width_m),
        row_spacing_m,
        volume_rate_per_m,
    )
    .map_err(map_calc_err)?;
    let out = PyDict::new(py);
    out.set_item("row_count", res.layout.row_count)?;
    out.set_item("placement_spacing_m", res.layout.placement_spacing_m)?;
    out.set_item("volume_per_row_m3", res.volumes.volume_per_row_m3)?;
    out.set_item("total_volume_m3", res.volumes.total_volume_m3)?;
    let rows: Vec<Vec<(f64, f64)>> = res
        .layout
        .rows
        .iter()
        .map(|s| to_tuples(&[s.start, s.end]))
        .collect();
    out.set_item("rows", rows)?;
    out.set_item("field", to_tuples(&res.layout.field_boundary.points))?;
    Ok(out.into())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(irrigation_layout, m)?)?;
    Ok(())
}
