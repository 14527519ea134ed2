//! Crop catalog: the lookup that sits in front of the irrigation calculator.
//!
//! The catalog resolves a crop name to its agronomic profile. A missing crop is a
//! `NotFound` raised here, before any calculator runs; the calculators only ever see
//! an already-resolved row spacing.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::fertilizer::NpkRate;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingM {
    pub between_rows: f64,
    pub between_plants: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlantingDensity {
    pub spacing_m: SpacingM,
    pub plants_per_hectare: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agronomy {
    pub planting_density: PlantingDensity,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub npk_per_hectare_kg: NpkRate,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    pub agronomy: Agronomy,
    pub fertilizer: FertilizerPlan,
}

impl CropProfile {
    #[inline]
    pub fn row_spacing_m(&self) -> f64 {
        self.agronomy.planting_density.spacing_m.between_rows
    }

    #[inline]
    pub fn npk_rate(&self) -> NpkRate {
        self.fertilizer.npk_per_hectare_kg
    }
}

/// Ordered list of crop profiles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropCatalog {
    pub crops: Vec<CropProfile>,
}

impl CropCatalog {
    /// Two crops shipped with the calculators.
    pub fn builtin() -> Self {
        Self {
            crops: vec![
                crop("Cassava", "Manihot esculenta", (1.0, 1.0), 10_000.0, (60.0, 40.0, 50.0)),
                crop("Cowpea", "Vigna unguiculata", (0.8, 0.25), 50_000.0, (20.0, 50.0, 40.0)),
            ],
        }
    }

    /// Parse a JSON array of profiles.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Result<&CropProfile> {
        let needle = name.trim();
        self.crops
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| CalcError::not_found("crop", name))
    }

    /// Between-rows spacing of `name`.
    pub fn row_spacing_m(&self, name: &str) -> Result<f64> {
        self.find(name).map(CropProfile::row_spacing_m)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.crops.iter().map(|c| c.name.as_str())
    }
}

fn crop(
    name: &str,
    scientific_name: &str,
    (between_rows, between_plants): (f64, f64),
    plants_per_hectare: f64,
    (n, p2o5, k2o): (f64, f64, f64),
) -> CropProfile {
    CropProfile {
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        agronomy: Agronomy {
            planting_density: PlantingDensity {
                spacing_m: SpacingM {
                    between_rows,
                    between_plants,
                },
                plants_per_hectare,
            },
        },
        fertilizer: FertilizerPlan {
            npk_per_hectare_kg: NpkRate::new(n, p2o5, k2o),
        },
    }
}
