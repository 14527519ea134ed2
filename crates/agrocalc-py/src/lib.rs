//! PyO3 bindings for the `agrocalc` calculators.
//!
//! Notes
//! - Keep bindings thin: measurements arrive as keyword arguments, rings leave as
//!   lists of `(x, y)` tuples so a web backend can forward them to its plotting layer.
//! - All arithmetic stays in the `agrocalc` crate.

use pyo3::prelude::*;

mod common;
mod field;
mod irrigation;

#[pymodule]
fn agrocalc_native(_py: Python, m: &PyModule) -> PyResult<()> {
    field::register(m)?;
    irrigation::register(m)?;
    m.add("__version__", agrocalc::VERSION)?;
    Ok(())
}
