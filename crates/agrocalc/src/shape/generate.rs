use nalgebra::Vector2;
use std::f64::consts::TAU;

use super::params::{ShapeKind, ShapeParams};
use crate::cfg::CIRCLE_SAMPLES;
use crate::error::{CalcError, Result};
use crate::geom::Polygon2;

/// Boundary ring for `params`.
///
/// Pre: none (params are validated here).
/// Post: closed, counterclockwise ring; see module docs for the frame convention.
pub fn generate(params: &ShapeParams) -> Result<Polygon2> {
    params.validate()?;
    let ring = match *params {
        ShapeParams::Rectangular { length_m, width_m } => rectangle(length_m, width_m),
        ShapeParams::Triangular { base_m, height_m } => triangle(base_m, height_m),
        ShapeParams::Circular { radius_m } => circle(radius_m, CIRCLE_SAMPLES),
        ShapeParams::Trapezoidal {
            longer_base_m,
            shorter_base_m,
            height_m,
        } => trapezoid(longer_base_m, shorter_base_m, height_m),
    };
    Ok(ring)
}

/// Same as [`generate`], but rejects params whose variant disagrees with `kind`.
pub fn generate_kind(kind: ShapeKind, params: &ShapeParams) -> Result<Polygon2> {
    if params.kind() != kind {
        return Err(CalcError::invalid(
            "shape_kind",
            format!("expected {kind} measurements, got {}", params.kind()),
        ));
    }
    generate(params)
}

/// `(0,0) → (L,0) → (L,W) → (0,W) → (0,0)`.
pub(crate) fn rectangle(length: f64, width: f64) -> Polygon2 {
    Polygon2::closed(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(length, 0.0),
        Vector2::new(length, width),
        Vector2::new(0.0, width),
    ])
}

/// Apex centered above the base.
fn triangle(base: f64, height: f64) -> Polygon2 {
    Polygon2::closed(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(base, 0.0),
        Vector2::new(base / 2.0, height),
    ])
}

/// `n` equal steps over `[0, 2π]`, center `(r, r)`.
///
/// The sample at `2π` is emitted as an exact copy of the sample at 0 so the ring
/// closes bit-for-bit.
fn circle(radius: f64, n: usize) -> Polygon2 {
    let pts = (0..n)
        .map(|i| {
            let th = (i as f64 / n as f64) * TAU;
            Vector2::new(radius * th.cos() + radius, radius * th.sin() + radius)
        })
        .collect();
    Polygon2::closed(pts)
}

/// Isosceles trapezoid centered over the longer base.
fn trapezoid(longer: f64, shorter: f64, height: f64) -> Polygon2 {
    let d = (longer - shorter) / 2.0;
    Polygon2::closed(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(longer, 0.0),
        Vector2::new(longer - d, height),
        Vector2::new(d, height),
    ])
}
