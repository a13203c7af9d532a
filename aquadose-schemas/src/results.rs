//! Successful calculator outputs.
//!
//! A failed calculation never produces one of these; the calculators return
//! the validation failure instead, so a zero here always means "computed to
//! zero".

use crate::units::CalculatorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerDose {
    pub dosage_ml: f64,
    pub formatted_dosage: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationDose {
    /// Single daily dose.
    pub dosage_ml: f64,
    pub formatted_dosage: String,
    /// `dosage_ml` times the number of treatment days.
    pub total_for_treatment_ml: f64,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionerDose {
    pub dosage_ml: f64,
    pub formatted_dosage: String,
    /// Volume of new water, in the tank's own unit.
    pub water_change_volume: f64,
    pub instructions: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalinityAction {
    Add,
    Remove,
    None,
}

impl SalinityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalinityAction::Add => "add",
            SalinityAction::Remove => "remove",
            SalinityAction::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalinityAdjustment {
    pub action: SalinityAction,
    pub salt_to_add_grams: f64,
    pub salt_to_add_ounces: f64,
    /// Set only when `action` is `Remove`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_to_remove_liters: Option<f64>,
    /// Empty when water has to be removed.
    pub formatted_amount: String,
    pub instructions: String,
}

/// The output of whichever calculator ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DoseResult {
    Fertilizer(FertilizerDose),
    Medication(MedicationDose),
    Conditioner(ConditionerDose),
    Salinity(SalinityAdjustment),
}

impl DoseResult {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            DoseResult::Fertilizer(_) => CalculatorKind::Fertilizer,
            DoseResult::Medication(_) => CalculatorKind::Medication,
            DoseResult::Conditioner(_) => CalculatorKind::Conditioner,
            DoseResult::Salinity(_) => CalculatorKind::Salinity,
        }
    }

    /// The multi-unit display string.
    pub fn formatted(&self) -> &str {
        match self {
            DoseResult::Fertilizer(r) => &r.formatted_dosage,
            DoseResult::Medication(r) => &r.formatted_dosage,
            DoseResult::Conditioner(r) => &r.formatted_dosage,
            DoseResult::Salinity(r) => &r.formatted_amount,
        }
    }

    pub fn instructions(&self) -> &str {
        match self {
            DoseResult::Fertilizer(r) => &r.instructions,
            DoseResult::Medication(r) => &r.instructions,
            DoseResult::Conditioner(r) => &r.instructions,
            DoseResult::Salinity(r) => &r.instructions,
        }
    }
}
