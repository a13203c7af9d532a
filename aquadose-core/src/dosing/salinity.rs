use crate::{
    error::ValidationError,
    units::{format_weight, grams_to_ounces, sg_to_ppt, to_fixed, to_liters},
    validation::{validate_number_in_range, validate_positive_number},
};
use aquadose_schemas::{
    inputs::SalinityInputs,
    results::{SalinityAction, SalinityAdjustment},
    units::SalinityUnit,
};
use tracing::debug;

/// Grams of marine salt that raise one liter of water by one ppt.
pub const SALT_GRAMS_PER_LITER_PPT: f64 = 1.3;

/// Differences smaller than this, in ppt, are left alone.
pub const SALINITY_TOLERANCE_PPT: f64 = 0.5;

pub const SG_RANGE: (f64, f64) = (1.0, 1.05);
pub const PPT_RANGE: (f64, f64) = (0.0, 50.0);

/// Salt to add, or water to swap for fresh water, to move from the current
/// to the target salinity.
///
/// Readings in specific gravity are converted to ppt first, and the
/// instructions always speak in ppt.
pub fn calculate_salinity(inputs: &SalinityInputs) -> Result<SalinityAdjustment, ValidationError> {
    validate_positive_number(inputs.tank_volume, "Tank volume")?;

    let (current_ppt, target_ppt) = match inputs.salinity_unit {
        SalinityUnit::Sg => {
            let (min, max) = SG_RANGE;
            validate_number_in_range(inputs.current_salinity, min, max, "Current specific gravity")?;
            validate_number_in_range(inputs.target_salinity, min, max, "Target specific gravity")?;
            (sg_to_ppt(inputs.current_salinity), sg_to_ppt(inputs.target_salinity))
        }
        SalinityUnit::Ppt => {
            let (min, max) = PPT_RANGE;
            validate_number_in_range(inputs.current_salinity, min, max, "Current salinity")?;
            validate_number_in_range(inputs.target_salinity, min, max, "Target salinity")?;
            (inputs.current_salinity, inputs.target_salinity)
        }
    };

    let difference = target_ppt - current_ppt;
    let volume_liters = to_liters(inputs.tank_volume, inputs.volume_unit);
    debug!(current_ppt, target_ppt, difference, volume_liters, "salinity difference");

    if difference.abs() < SALINITY_TOLERANCE_PPT {
        return Ok(SalinityAdjustment {
            action: SalinityAction::None,
            salt_to_add_grams: 0.0,
            salt_to_add_ounces: 0.0,
            water_to_remove_liters: None,
            formatted_amount: "0 g".to_string(),
            instructions: "Salinity is already at target level. No adjustment needed.".to_string(),
        });
    }

    if difference > 0.0 {
        let salt_to_add_grams = difference * volume_liters * SALT_GRAMS_PER_LITER_PPT;
        let formatted_amount = format_weight(salt_to_add_grams);
        let instructions = format!(
            "Add {} of marine salt to raise salinity from {} to {} ppt. \
             Dissolve salt in a separate container before adding. \
             Add slowly over several hours while monitoring.",
            formatted_amount,
            to_fixed(current_ppt, 1),
            to_fixed(target_ppt, 1)
        );

        return Ok(SalinityAdjustment {
            action: SalinityAction::Add,
            salt_to_add_grams,
            salt_to_add_ounces: grams_to_ounces(salt_to_add_grams),
            water_to_remove_liters: None,
            formatted_amount,
            instructions,
        });
    }

    // A fresh-water target means swapping out the whole tank.
    let water_to_remove_liters = if target_ppt > 0.0 {
        (difference / target_ppt).abs() * volume_liters
    } else {
        volume_liters
    };
    let instructions = format!(
        "Remove {} liters of tank water and replace with freshwater to lower salinity \
         from {} to {} ppt. Make changes gradually over several hours.",
        to_fixed(water_to_remove_liters, 2),
        to_fixed(current_ppt, 1),
        to_fixed(target_ppt, 1)
    );

    Ok(SalinityAdjustment {
        action: SalinityAction::Remove,
        salt_to_add_grams: 0.0,
        salt_to_add_ounces: 0.0,
        water_to_remove_liters: Some(water_to_remove_liters),
        formatted_amount: String::new(),
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use aquadose_schemas::units::VolumeUnit;

    fn inputs(volume: f64, unit: VolumeUnit, current: f64, target: f64, scale: SalinityUnit) -> SalinityInputs {
        SalinityInputs {
            tank_volume: volume,
            volume_unit: unit,
            current_salinity: current,
            target_salinity: target,
            salinity_unit: scale,
        }
    }

    #[test]
    fn raising_specific_gravity_adds_salt() {
        let adj = calculate_salinity(&inputs(100.0, VolumeUnit::Liters, 1.020, 1.025, SalinityUnit::Sg)).unwrap();
        assert_eq!(adj.action, SalinityAction::Add);
        assert_relative_eq!(adj.salt_to_add_grams, 650.0, epsilon = 1e-6);
        assert_relative_eq!(adj.salt_to_add_ounces, 650.0 / 28.3495, epsilon = 1e-6);
        assert_eq!(adj.formatted_amount, "650.00 g / 22.93 oz");
        assert_eq!(adj.water_to_remove_liters, None);
        assert!(adj.instructions.contains("from 20.0 to 25.0 ppt"));
        assert!(adj.instructions.contains("Dissolve salt in a separate container"));
    }

    #[test]
    fn lowering_specific_gravity_removes_water() {
        let adj = calculate_salinity(&inputs(50.0, VolumeUnit::Liters, 1.025, 1.020, SalinityUnit::Sg)).unwrap();
        assert_eq!(adj.action, SalinityAction::Remove);
        assert_relative_eq!(adj.water_to_remove_liters.unwrap(), 12.5, epsilon = 1e-6);
        assert_eq!(adj.salt_to_add_grams, 0.0);
        assert_eq!(adj.formatted_amount, "");
        assert!(adj.instructions.starts_with("Remove 12.50 liters of tank water"));
    }

    #[test]
    fn gallons_are_converted_before_dosing_salt() {
        let adj = calculate_salinity(&inputs(10.0, VolumeUnit::Gallons, 30.0, 31.0, SalinityUnit::Ppt)).unwrap();
        assert_relative_eq!(adj.salt_to_add_grams, 37.8541 * 1.3, epsilon = 1e-9);
    }

    #[test]
    fn readings_on_a_half_tenth_round_up() {
        let adj = calculate_salinity(&inputs(100.0, VolumeUnit::Liters, 20.25, 30.75, SalinityUnit::Ppt)).unwrap();
        assert!(adj.instructions.contains("from 20.3 to 30.8 ppt"));
    }

    #[test]
    fn small_difference_needs_nothing() {
        let adj = calculate_salinity(&inputs(100.0, VolumeUnit::Liters, 35.0, 35.4, SalinityUnit::Ppt)).unwrap();
        assert_eq!(adj.action, SalinityAction::None);
        assert_eq!(adj.formatted_amount, "0 g");
        assert_eq!(
            adj.instructions,
            "Salinity is already at target level. No adjustment needed."
        );
    }

    #[test]
    fn fresh_water_target_replaces_whole_tank() {
        let adj = calculate_salinity(&inputs(40.0, VolumeUnit::Liters, 10.0, 0.0, SalinityUnit::Ppt)).unwrap();
        assert_eq!(adj.action, SalinityAction::Remove);
        assert_eq!(adj.water_to_remove_liters, Some(40.0));
    }

    #[test]
    fn range_checks_depend_on_scale() {
        let err = calculate_salinity(&inputs(100.0, VolumeUnit::Liters, 35.0, 1.025, SalinityUnit::Sg)).unwrap_err();
        assert_eq!(err.to_string(), "Current specific gravity must be between 1 and 1.05");

        let err = calculate_salinity(&inputs(100.0, VolumeUnit::Liters, 1.02, 1.1, SalinityUnit::Sg)).unwrap_err();
        assert_eq!(err.to_string(), "Target specific gravity must be between 1 and 1.05");

        let err = calculate_salinity(&inputs(100.0, VolumeUnit::Liters, 35.0, 60.0, SalinityUnit::Ppt)).unwrap_err();
        assert_eq!(err.to_string(), "Target salinity must be between 0 and 50");
    }

    #[test]
    fn volume_checked_before_salinity() {
        let err = calculate_salinity(&inputs(0.0, VolumeUnit::Liters, 99.0, 99.0, SalinityUnit::Ppt)).unwrap_err();
        assert_eq!(err.to_string(), "Tank volume must be a positive number");
    }
}
