//! Fixed constants (internal).
//!
//! Policy
//! - Sampling density, unit factors and size limits are constants, not operator input.

/// Number of angular steps used to approximate a circular field boundary.
/// The ring carries `CIRCLE_SAMPLES + 1` points because both ends of `[0, 2π]` are sampled.
pub const CIRCLE_SAMPLES: usize = 100;

/// Square meters per hectare.
pub const M2_PER_HECTARE: f64 = 10_000.0;

/// Upper bound on generated planting rows; larger counts are rejected as input errors.
pub const MAX_ROWS: usize = 1_000_000;
