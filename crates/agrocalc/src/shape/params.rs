use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{non_negative, CalcError, Result};

/// Shape family of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangular,
    Triangular,
    Circular,
    Trapezoidal,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangular,
        ShapeKind::Triangular,
        ShapeKind::Circular,
        ShapeKind::Trapezoidal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangular => "rectangular",
            ShapeKind::Triangular => "triangular",
            ShapeKind::Circular => "circular",
            ShapeKind::Trapezoidal => "trapezoidal",
        }
    }

    /// Measurement names this kind needs, in the order forms usually show them.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Rectangular => &["length_m", "width_m"],
            ShapeKind::Triangular => &["base_m", "height_m"],
            ShapeKind::Circular => &["radius_m"],
            ShapeKind::Trapezoidal => &["longer_base_m", "shorter_base_m", "height_m"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CalcError::invalid("shape_kind", format!("unknown shape `{s}`")))
    }
}

/// Measurements for one shape, in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape_kind", rename_all = "snake_case")]
pub enum ShapeParams {
    Rectangular {
        length_m: f64,
        width_m: f64,
    },
    Triangular {
        base_m: f64,
        height_m: f64,
    },
    Circular {
        radius_m: f64,
    },
    Trapezoidal {
        longer_base_m: f64,
        shorter_base_m: f64,
        height_m: f64,
    },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Rectangular { .. } => ShapeKind::Rectangular,
            ShapeParams::Triangular { .. } => ShapeKind::Triangular,
            ShapeParams::Circular { .. } => ShapeKind::Circular,
            ShapeParams::Trapezoidal { .. } => ShapeKind::Trapezoidal,
        }
    }

    /// Build params for `kind` from a name → value lookup (form fields, CLI flags,
    /// table columns). A field the lookup cannot supply is reported by name.
    ///
    /// The result is validated.
    pub fn from_fields<F>(kind: ShapeKind, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let get = |name: &str| {
            lookup(name).ok_or_else(|| CalcError::invalid(name, "missing measurement"))
        };
        let params = match kind {
            ShapeKind::Rectangular => ShapeParams::Rectangular {
                length_m: get("length_m")?,
                width_m: get("width_m")?,
            },
            ShapeKind::Triangular => ShapeParams::Triangular {
                base_m: get("base_m")?,
                height_m: get("height_m")?,
            },
            ShapeKind::Circular => ShapeParams::Circular {
                radius_m: get("radius_m")?,
            },
            ShapeKind::Trapezoidal => ShapeParams::Trapezoidal {
                longer_base_m: get("longer_base_m")?,
                shorter_base_m: get("shorter_base_m")?,
                height_m: get("height_m")?,
            },
        };
        params.validate()?;
        Ok(params)
    }

    /// Every measurement finite and `>= 0`; trapezoid bases ordered longer ≥ shorter.
    ///
    /// Zero is accepted: it yields a degenerate but well-formed ring.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ShapeParams::Rectangular { length_m, width_m } => {
                non_negative("length_m", length_m)?;
                non_negative("width_m", width_m)?;
            }
            ShapeParams::Triangular { base_m, height_m } => {
                non_negative("base_m", base_m)?;
                non_negative("height_m", height_m)?;
            }
            ShapeParams::Circular { radius_m } => {
                non_negative("radius_m", radius_m)?;
            }
            ShapeParams::Trapezoidal {
                longer_base_m,
                shorter_base_m,
                height_m,
            } => {
                non_negative("longer_base_m", longer_base_m)?;
                non_negative("shorter_base_m", shorter_base_m)?;
                non_negative("height_m", height_m)?;
                if shorter_base_m > longer_base_m {
                    let reason = format!(
                        "must not exceed longer_base_m ({shorter_base_m} > {longer_base_m})"
                    );
                    return Err(CalcError::invalid("shorter_base_m", reason));
                }
            }
        }
        Ok(())
    }
}
