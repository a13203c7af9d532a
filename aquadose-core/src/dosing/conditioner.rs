use crate::{
    error::ValidationError,
    units::{format_dosage, to_fixed},
    validation::{validate_number_in_range, validate_positive_number},
};
use aquadose_schemas::{inputs::ConditionerInputs, results::ConditionerDose};

/// Conditioner needed to treat the new water of a partial water change.
/// The change volume stays in the tank's own unit.
pub fn calculate_water_conditioner(inputs: &ConditionerInputs) -> Result<ConditionerDose, ValidationError> {
    validate_positive_number(inputs.tank_volume, "Tank volume")?;
    validate_number_in_range(inputs.water_change_percentage, 1.0, 100.0, "Water change percentage")?;
    validate_positive_number(inputs.conditioner_dose_rate, "Conditioner dose rate")?;

    let water_change_volume = inputs.tank_volume * inputs.water_change_percentage / 100.0;
    let dosage_ml = water_change_volume * inputs.conditioner_dose_rate;

    let formatted_dosage = format_dosage(dosage_ml);
    let instructions = format!(
        "For a {}% water change ({} {}), add {} of water conditioner. \
         Add conditioner to new water before adding to tank.",
        inputs.water_change_percentage,
        to_fixed(water_change_volume, 2),
        inputs.volume_unit,
        formatted_dosage
    );

    Ok(ConditionerDose {
        dosage_ml,
        formatted_dosage,
        water_change_volume,
        instructions,
    })
}
