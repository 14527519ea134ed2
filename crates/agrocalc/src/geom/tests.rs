use super::*;
use nalgebra::{vector, Vector2};

#[test]
fn shoelace_unit_square_both_orientations() {
    let ccw = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!((shoelace_signed_area(&ccw) - 1.0).abs() < 1e-12);
    let cw: Vec<Vector2<f64>> = ccw.iter().rev().copied().collect();
    assert!((shoelace_signed_area(&cw) + 1.0).abs() < 1e-12);
    // Repeating the first point does not change the area.
    let mut closed = ccw.clone();
    closed.push(ccw[0]);
    assert!((shoelace_signed_area(&closed) - 1.0).abs() < 1e-12);
}

#[test]
fn shoelace_degenerate_inputs() {
    assert_eq!(shoelace_signed_area(&[]), 0.0);
    assert_eq!(shoelace_signed_area(&[vector![1.0, 2.0], vector![3.0, 4.0]]), 0.0);
}

#[test]
fn polygon_closes_and_reports_columns() {
    let p = Polygon2::closed(vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 3.0]]);
    assert_eq!(p.len(), 4);
    assert_eq!(p.vertex_count(), 3);
    assert!(p.is_closed(0.0));
    assert_eq!(p.xs(), vec![0.0, 2.0, 1.0, 0.0]);
    assert_eq!(p.ys(), vec![0.0, 0.0, 3.0, 0.0]);
    assert!((p.signed_area() - 3.0).abs() < 1e-12);
    let (lo, hi) = p.bounding_box().unwrap();
    assert_eq!(lo, vector![0.0, 0.0]);
    assert_eq!(hi, vector![2.0, 3.0]);
}

#[test]
fn degenerate_ring_still_repeats_first_point() {
    let p = Polygon2::closed(vec![vector![0.0, 0.0]; 4]);
    assert_eq!(p.len(), 5);
    assert!(p.is_closed(0.0));
}

#[test]
fn empty_polygon() {
    let p = Polygon2::closed(Vec::new());
    assert!(p.is_empty());
    assert!(!p.is_closed(1.0));
    assert!(p.bounding_box().is_none());
}

#[test]
fn segment_length() {
    let s = Segment2::new(vector![0.0, 2.0], vector![50.0, 2.0]);
    assert!((s.length() - 50.0).abs() < 1e-12);
}

#[test]
fn points_serialize_as_xy_records() {
    let p = Polygon2::closed(vec![vector![0.0, 0.0], vector![2.0, 0.5], vector![1.0, 3.0]]);
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["points"].as_array().unwrap().len(), 4);
    assert_eq!(v["points"][1], serde_json::json!({"x": 2.0, "y": 0.5}));
    let back: Polygon2 = serde_json::from_value(v).unwrap();
    assert_eq!(back, p);

    let s = Segment2::new(vector![0.0, 2.0], vector![50.0, 2.0]);
    let v = serde_json::to_value(s).unwrap();
    assert_eq!(v["start"], serde_json::json!({"x": 0.0, "y": 2.0}));
    assert_eq!(v["end"], serde_json::json!({"x": 50.0, "y": 2.0}));
}

#[test]
fn array_points_rejected() {
    let r: Result<Polygon2, _> = serde_json::from_str(r#"{"points": [[0.0, 0.0]]}"#);
    assert!(r.is_err());
}
