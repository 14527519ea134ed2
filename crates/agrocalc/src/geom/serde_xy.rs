//! Serde adapters writing points as `{"x": .., "y": ..}` records.

use nalgebra::Vector2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Xy {
    x: f64,
    y: f64,
}

impl From<&Vector2<f64>> for Xy {
    fn from(p: &Vector2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Xy> for Vector2<f64> {
    fn from(p: Xy) -> Self {
        Vector2::new(p.x, p.y)
    }
}

pub(crate) mod point {
    use super::*;

    pub fn serialize<S: Serializer>(p: &Vector2<f64>, s: S) -> Result<S::Ok, S::Error> {
        Xy::from(p).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vector2<f64>, D::Error> {
        Xy::deserialize(d).map(Into::into)
    }
}

pub(crate) mod points {
    use super::*;

    pub fn serialize<S: Serializer>(ps: &[Vector2<f64>], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(ps.iter().map(Xy::from))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vector2<f64>>, D::Error> {
        let raw = Vec::<Xy>::deserialize(d)?;
        Ok(raw.into_iter().map(Into::into).collect())
    }
}
