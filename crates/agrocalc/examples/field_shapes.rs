//! Print boundary rings and areas for one field of each shape.
//!
//! Usage:
//!   cargo run -p agrocalc --example field_shapes

use agrocalc::prelude::*;

fn main() {
    let fields = [
        ShapeParams::Rectangular {
            length_m: 100.0,
            width_m: 50.0,
        },
        ShapeParams::Triangular {
            base_m: 80.0,
            height_m: 40.0,
        },
        ShapeParams::Circular { radius_m: 30.0 },
        ShapeParams::Trapezoidal {
            longer_base_m: 100.0,
            shorter_base_m: 60.0,
            height_m: 40.0,
        },
    ];
    for params in fields {
        let (ring, a) = match (generate(&params), area(&params)) {
            (Ok(ring), Ok(a)) => (ring, a),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("{}: {e}", params.kind());
                continue;
            }
        };
        println!(
            "{}: {} points, area {:.2} m² ({:.4} ha), ring area {:.2} m²",
            params.kind(),
            ring.len(),
            a.area_m2,
            a.area_hectare,
            ring.signed_area()
        );
    }
}
