//! Error type shared by all calculators.

use std::fmt;

/// Failures raised synchronously by the calculators.
///
/// `InvalidParameter` is produced by the core itself. `NotFound` is produced by the
/// crop catalog that resolves inputs *before* a calculator runs.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcError {
    InvalidParameter { field: String, reason: String },
    NotFound { what: &'static str, name: String },
}

impl CalcError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(what: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            name: name.into(),
        }
    }

    /// True for input errors the operator can fix by editing the form.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { field, reason } => {
                write!(f, "invalid parameter `{field}`: {reason}")
            }
            Self::NotFound { what, name } => write!(f, "{what} not found: {name}"),
        }
    }
}

impl std::error::Error for CalcError {}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Require a finite value `>= 0`.
pub(crate) fn non_negative(field: &str, v: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(CalcError::invalid(field, format!("must be finite, got {v}")));
    }
    if v < 0.0 {
        return Err(CalcError::invalid(field, format!("must be >= 0, got {v}")));
    }
    Ok(v)
}

/// Require a finite value `> 0`.
pub(crate) fn positive(field: &str, v: f64) -> Result<f64> {
    non_negative(field, v)?;
    if v == 0.0 {
        return Err(CalcError::invalid(field, "must be > 0"));
    }
    Ok(v)
}

/// Require a finite value of any sign.
pub(crate) fn finite(field: &str, v: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(CalcError::invalid(field, format!("must be finite, got {v}")));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field() {
        let e = CalcError::invalid("radius_m", "must be >= 0, got -1");
        assert_eq!(e.to_string(), "invalid parameter `radius_m`: must be >= 0, got -1");
        let nf = CalcError::not_found("crop", "Sorghum");
        assert_eq!(nf.to_string(), "crop not found: Sorghum");
        assert!(e.is_invalid_parameter());
        assert!(!nf.is_invalid_parameter());
    }

    #[test]
    fn guards() {
        assert!(non_negative("x", 0.0).is_ok());
        assert!(non_negative("x", -0.5).is_err());
        assert!(non_negative("x", f64::NAN).is_err());
        assert!(positive("x", 0.0).is_err());
        assert!(positive("x", f64::INFINITY).is_err());
        assert_eq!(positive("x", 2.0), Ok(2.0));
        assert!(finite("x", -3.0).is_ok());
        assert!(finite("x", f64::NEG_INFINITY).is_err());
    }
}
