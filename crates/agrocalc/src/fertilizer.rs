//! NPK fertilizer quantities for a planted area.
//!
//! Rates come from the crop profile in kg/ha; quantities are plain products with the
//! area, plus a helper that spreads a total along planting rows. `complete` chains
//! both for a rectangular field, deriving the row count the same way the irrigation
//! layout does.

use serde::{Deserialize, Serialize};

use crate::area::AreaResult;
use crate::crop::CropProfile;
use crate::error::{non_negative, Result};
use crate::irrigation::{row_count, FieldDimensions};

/// Nutrient rate in kg per hectare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NpkRate {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P2O5")]
    pub p2o5: f64,
    #[serde(rename = "K2O")]
    pub k2o: f64,
}

impl NpkRate {
    pub fn new(n: f64, p2o5: f64, k2o: f64) -> Self {
        Self { n, p2o5, k2o }
    }

    fn validate(&self) -> Result<()> {
        non_negative("N", self.n)?;
        non_negative("P2O5", self.p2o5)?;
        non_negative("K2O", self.k2o)?;
        Ok(())
    }
}

/// Nutrient quantities in kg for a given area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NpkQuantity {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P2O5")]
    pub p2o5: f64,
    #[serde(rename = "K2O")]
    pub k2o: f64,
    pub total_kg: f64,
}

/// `rate × area` per nutrient; `total_kg` is the sum of the three.
pub fn quantity(area_hectare: f64, rate: &NpkRate) -> Result<NpkQuantity> {
    let a = non_negative("area_hectare", area_hectare)?;
    rate.validate()?;
    let n = rate.n * a;
    let p2o5 = rate.p2o5 * a;
    let k2o = rate.k2o * a;
    Ok(NpkQuantity {
        n,
        p2o5,
        k2o,
        total_kg: (rate.n + rate.p2o5 + rate.k2o) * a,
    })
}

/// kg per linear meter of row. Zero rows or zero-length rows give 0, not an error.
pub fn per_linear_meter(total_kg: f64, row_count: usize, row_length_m: f64) -> Result<f64> {
    let total = non_negative("total_kg", total_kg)?;
    let len = non_negative("row_length_m", row_length_m)?;
    if row_count == 0 || len == 0.0 {
        return Ok(0.0);
    }
    Ok(total / (row_count as f64 * len))
}

/// Fertilizer needs of one rectangular field planted with one crop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldInputs {
    pub crop: String,
    pub area: AreaResult,
    pub quantities_kg: NpkQuantity,
    pub row_count: usize,
    /// Rows run along `length_m`.
    pub row_length_m: f64,
    pub kg_per_linear_meter: f64,
}

/// NPK for the whole field plus kg per meter of row.
///
/// Rows: `floor(width / crop between-rows spacing)`, each `length_m` long. A spacing
/// wider than the field gives zero rows and 0 kg/m.
pub fn complete(field: &FieldDimensions, crop: &CropProfile) -> Result<FieldInputs> {
    let rows = row_count(field, crop.row_spacing_m())?;
    let area = AreaResult::from_m2(field.length_m * field.width_m);
    let q = quantity(area.area_hectare, &crop.npk_rate())?;
    let per_meter = per_linear_meter(q.total_kg, rows, field.length_m)?;
    Ok(FieldInputs {
        crop: crop.name.clone(),
        area,
        quantities_kg: q,
        row_count: rows,
        row_length_m: field.length_m,
        kg_per_linear_meter: per_meter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_scales_with_area() {
        let q = quantity(2.5, &NpkRate::new(60.0, 40.0, 50.0)).unwrap();
        assert_eq!(q.n, 150.0);
        assert_eq!(q.p2o5, 100.0);
        assert_eq!(q.k2o, 125.0);
        assert_eq!(q.total_kg, 375.0);
    }

    #[test]
    fn zero_area_gives_zero() {
        let q = quantity(0.0, &NpkRate::new(20.0, 50.0, 40.0)).unwrap();
        assert_eq!(q.total_kg, 0.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(quantity(-1.0, &NpkRate::default()).is_err());
        assert!(quantity(1.0, &NpkRate::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(quantity(1.0, &NpkRate::new(0.0, -5.0, 0.0)).is_err());
    }

    #[test]
    fn linear_meter_split() {
        assert_eq!(per_linear_meter(375.0, 5, 50.0).unwrap(), 1.5);
        assert_eq!(per_linear_meter(375.0, 0, 50.0).unwrap(), 0.0);
        assert_eq!(per_linear_meter(375.0, 5, 0.0).unwrap(), 0.0);
        assert!(per_linear_meter(375.0, 5, -1.0).is_err());
    }

    #[test]
    fn complete_for_cassava_field() {
        let cassava = crate::crop::CropCatalog::builtin().find("Cassava").unwrap().clone();
        let plan = complete(&FieldDimensions::new(100.0, 50.0), &cassava).unwrap();
        assert_eq!(plan.area.area_hectare, 0.5);
        assert_eq!(plan.quantities_kg.n, 30.0);
        assert_eq!(plan.quantities_kg.p2o5, 20.0);
        assert_eq!(plan.quantities_kg.k2o, 25.0);
        assert_eq!(plan.quantities_kg.total_kg, 75.0);
        // 50 m wide at 1.0 m between rows, 100 m per row.
        assert_eq!(plan.row_count, 50);
        assert_eq!(plan.row_length_m, 100.0);
        assert!((plan.kg_per_linear_meter - 0.015).abs() < 1e-15);
    }

    #[test]
    fn complete_narrow_field_has_no_rows() {
        let cowpea = crate::crop::CropCatalog::builtin().find("Cowpea").unwrap().clone();
        let plan = complete(&FieldDimensions::new(40.0, 0.5), &cowpea).unwrap();
        assert_eq!(plan.row_count, 0);
        assert_eq!(plan.kg_per_linear_meter, 0.0);
        assert!(plan.quantities_kg.total_kg > 0.0);
        assert!(complete(&FieldDimensions::new(-1.0, 5.0), &cowpea).is_err());
    }

    #[test]
    fn rate_json_uses_nutrient_symbols() {
        let r: NpkRate = serde_json::from_str(r#"{"N": 60, "P2O5": 40, "K2O": 50}"#).unwrap();
        assert_eq!(r, NpkRate::new(60.0, 40.0, 50.0));
    }
}
