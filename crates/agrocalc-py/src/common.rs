use agrocalc::shape::{ShapeKind, ShapeParams};
use agrocalc::CalcError;
use nalgebra::Vector2;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// `InvalidParameter` → `ValueError`, `NotFound` → `KeyError`.
pub fn map_calc_err(err: CalcError) -> PyErr {
    match err {
        CalcError::NotFound { .. } => PyKeyError::new_err(err.to_string()),
        CalcError::InvalidParameter { .. } => PyValueError::new_err(err.to_string()),
    }
}

/// Parse `kind` plus keyword measurements into validated params.
pub fn params_from_kwargs(kind: &str, fields: Option<&PyDict>) -> PyResult<ShapeParams> {
    let kind: ShapeKind = kind.parse().map_err(map_calc_err)?;
    let mut values = Vec::new();
    if let Some(d) = fields {
        for (k, v) in d.iter() {
            let key: String = k.extract()?;
            let val: f64 = v
                .extract()
                .map_err(|_| PyValueError::new_err(format!("`{key}` must be a number")))?;
            values.push((key, val));
        }
    }
    ShapeParams::from_fields(kind, |name| {
        values.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    })
    .map_err(map_calc_err)
}

pub fn to_tuples(points: &[Vector2<f64>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}
