//! The four dosing calculators.
//!
//! Every calculator validates its fields in a fixed order and stops at the
//! first failure, so the error returned always names the earliest bad field.
//! No formula runs on invalid input.

pub mod conditioner;
pub mod fertilizer;
pub mod medication;
pub mod salinity;

pub use conditioner::calculate_water_conditioner;
pub use fertilizer::calculate_fertilizer_dosing;
pub use medication::calculate_medication_dosing;
pub use salinity::calculate_salinity;

use crate::{error::ValidationError, units::to_fixed};
use aquadose_schemas::{
    inputs::CalculatorInputs,
    results::{DoseResult, SalinityAction},
};
use tracing::debug;

/// Runs whichever calculator matches `inputs`.
pub fn calculate(inputs: &CalculatorInputs) -> Result<DoseResult, ValidationError> {
    let result = match inputs {
        CalculatorInputs::Fertilizer(i) => calculate_fertilizer_dosing(i).map(DoseResult::Fertilizer),
        CalculatorInputs::Medication(i) => calculate_medication_dosing(i).map(DoseResult::Medication),
        CalculatorInputs::Conditioner(i) => calculate_water_conditioner(i).map(DoseResult::Conditioner),
        CalculatorInputs::Salinity(i) => calculate_salinity(i).map(DoseResult::Salinity),
    };

    match &result {
        Ok(dose) => debug!(kind = %inputs.kind(), result = dose.formatted(), "calculation complete"),
        Err(e) => debug!(kind = %inputs.kind(), field = e.field(), "inputs rejected: {}", e),
    }
    result
}

/// One-line result stored alongside a saved calculation: the formatted
/// amount, or a short sentence when a salinity result has none.
pub fn summary(result: &DoseResult) -> String {
    match result {
        DoseResult::Salinity(r) => match (r.action, r.water_to_remove_liters) {
            (SalinityAction::Remove, Some(liters)) => {
                format!("Remove {} L of tank water", to_fixed(liters, 2))
            }
            _ if r.formatted_amount.is_empty() => "No adjustment needed".to_string(),
            _ => r.formatted_amount.clone(),
        },
        other => other.formatted().to_string(),
    }
}
