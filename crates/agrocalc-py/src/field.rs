//! Shape and area bindings.

use crate::common::{map_calc_err, params_from_kwargs, to_tuples};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Closed boundary ring for a field, e.g. `generate_shape("circular", radius_m=10.0)`.
#[pyfunction]
#[pyo3(signature = (kind, **fields))]
pub fn generate_shape(kind: &str, fields: Option<&PyDict>) -> PyResult<Vec<(f64, f64)>> {
    let params = params_from_kwargs(kind, fields)?;
    let ring = agrocalc::shape::generate(&params).map_err(map_calc_err)?;
    Ok(to_tuples(&ring.points))
}

/// `(area_m2, area_hectare)` for a field.
#[pyfunction]
#[pyo3(signature = (kind, **fields))]
pub fn field_area(kind: &str, fields: Option<&PyDict>) -> PyResult<(f64, f64)> {
    let params = params_from_kwargs(kind, fields)?;
    let a = agrocalc::area::area(&params).map_err(map_calc_err)?;
    Ok((a.area_m2, a.area_hectare))
}

/// NPK quantities `(N, P2O5, K2O, total_kg)` for per-hectare rates over an area.
#[pyfunction]
pub fn npk_quantity(
    area_hectare: f64,
    n: f64,
    p2o5: f64,
    k2o: f64,
) -> PyResult<(f64, f64, f64, f64)> {
    let rate = agrocalc::fertilizer::NpkRate::new(n, p2o5, k2o);
    let q = agrocalc::fertilizer::quantity(area_hectare, &rate).map_err(map_calc_err)?;
    Ok((q.n, q.p2o5, q.k2o, q.total_kg))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_shape, m)?)?;
    m.add_function(wrap_pyfunction!(field_area, m)?)?;
    m.add_function(wrap_pyfunction!(npk_quantity, m)?)?;
    Ok(())
}
