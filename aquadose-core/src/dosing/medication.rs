use crate::{
    error::ValidationError,
    units::format_dosage,
    validation::{validate_number_in_range, validate_positive_number},
};
use aquadose_schemas::{inputs::MedicationInputs, results::MedicationDose};

pub const MIN_TREATMENT_DAYS: f64 = 1.0;
pub const MAX_TREATMENT_DAYS: f64 = 30.0;

/// Daily dose and the total for the whole course of treatment.
///
/// Unlike the other calculators the tank volume is used exactly as entered,
/// with no conversion to liters: the dose rate is taken to be per unit of
/// whatever unit the tank is measured in. `medication_strength` must be
/// positive but does not enter the formula.
pub fn calculate_medication_dosing(inputs: &MedicationInputs) -> Result<MedicationDose, ValidationError> {
    validate_positive_number(inputs.tank_volume, "Tank volume")?;
    validate_positive_number(inputs.medication_strength, "Medication strength")?;
    validate_positive_number(inputs.dosage_per_gallon, "Dosage per gallon")?;
    validate_number_in_range(
        inputs.treatment_days,
        MIN_TREATMENT_DAYS,
        MAX_TREATMENT_DAYS,
        "Treatment days",
    )?;

    let dosage_ml = inputs.tank_volume * inputs.dosage_per_gallon;
    let total_for_treatment_ml = dosage_ml * inputs.treatment_days;

    let formatted_dosage = format_dosage(dosage_ml);
    let instructions = format!(
        "Dose {} per day for {} days. Total medication needed: {}. \
         Always follow product instructions and remove carbon filtration during treatment.",
        formatted_dosage,
        inputs.treatment_days,
        format_dosage(total_for_treatment_ml)
    );

    Ok(MedicationDose {
        dosage_ml,
        formatted_dosage,
        total_for_treatment_ml,
        instructions,
    })
}
