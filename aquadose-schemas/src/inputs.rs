//! Typed input records, one per calculator.
//!
//! Numeric fields are plain `f64` so that text a user typed but which does
//! not parse can still reach the validators as `NaN` and be rejected there.

use crate::units::{CalculatorKind, ConcentrationType, SalinityUnit, VolumeUnit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerInputs {
    /// Must be > 0.
    pub tank_volume: f64,
    pub volume_unit: VolumeUnit,
    /// Target nutrient level in the tank, ppm. Must be > 0.
    pub desired_ppm: f64,
    /// Product strength, read according to `concentration_type`. Must be > 0.
    pub product_concentration: f64,
    pub concentration_type: ConcentrationType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationInputs {
    /// Must be > 0.
    pub tank_volume: f64,
    pub volume_unit: VolumeUnit,
    /// Must be > 0. Validated but not part of the dose formula.
    pub medication_strength: f64,
    /// Millilitres per unit of tank volume. Must be > 0.
    pub dosage_per_gallon: f64,
    /// Whole days, 1 to 30 inclusive.
    pub treatment_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionerInputs {
    /// Must be > 0.
    pub tank_volume: f64,
    pub volume_unit: VolumeUnit,
    /// 1 to 100 inclusive.
    pub water_change_percentage: f64,
    /// Millilitres of conditioner per unit of new water. Must be > 0.
    pub conditioner_dose_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalinityInputs {
    /// Must be > 0.
    pub tank_volume: f64,
    pub volume_unit: VolumeUnit,
    /// 0..=50 for ppt, 1.0..=1.05 for sg.
    pub current_salinity: f64,
    /// Same bounds as `current_salinity`.
    pub target_salinity: f64,
    pub salinity_unit: SalinityUnit,
}

/// Inputs for any one of the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalculatorInputs {
    Fertilizer(FertilizerInputs),
    Medication(MedicationInputs),
    Conditioner(ConditionerInputs),
    Salinity(SalinityInputs),
}

impl CalculatorInputs {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculatorInputs::Fertilizer(_) => CalculatorKind::Fertilizer,
            CalculatorInputs::Medication(_) => CalculatorKind::Medication,
            CalculatorInputs::Conditioner(_) => CalculatorKind::Conditioner,
            CalculatorInputs::Salinity(_) => CalculatorKind::Salinity,
        }
    }
}
