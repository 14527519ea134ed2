use nalgebra::Vector2;

/// Shoelace formula over consecutive pairs.
///
/// Works for closed rings (last == first contributes zero) and for open vertex lists
/// (the wrap-around edge is added).
pub fn shoelace_signed_area(points: &[Vector2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Axis-aligned bounding box as `(min, max)`.
pub fn bounding_box(points: &[Vector2<f64>]) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let first = *points.first()?;
    let (lo, hi) = points.iter().skip(1).fold((first, first), |(lo, hi), p| {
        (
            Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });
    Some((lo, hi))
}
