use crate::{
    error::ValidationError,
    units::{format_dosage, to_liters},
    validation::validate_positive_number,
};
use aquadose_schemas::{inputs::FertilizerInputs, results::FertilizerDose, units::ConcentrationType};

/// Millilitres of product that bring the whole tank to the desired ppm.
///
/// A percentage concentration is turned into ppm with a factor of 10 000
/// (1% = 10 000 ppm). The instructions quote the volume as it was entered.
pub fn calculate_fertilizer_dosing(inputs: &FertilizerInputs) -> Result<FertilizerDose, ValidationError> {
    validate_positive_number(inputs.tank_volume, "Tank volume")?;
    validate_positive_number(inputs.desired_ppm, "Desired PPM")?;
    validate_positive_number(inputs.product_concentration, "Product concentration")?;

    let volume_liters = to_liters(inputs.tank_volume, inputs.volume_unit);

    let dosage_ml = match inputs.concentration_type {
        ConcentrationType::Percentage => {
            (inputs.desired_ppm * volume_liters) / (inputs.product_concentration * 10_000.0)
        }
        ConcentrationType::Ppm => (inputs.desired_ppm * volume_liters) / inputs.product_concentration,
    };

    let formatted_dosage = format_dosage(dosage_ml);
    let instructions = format!(
        "Add {} of fertilizer solution to your {} {} tank to achieve {} ppm. \
         Dose slowly and monitor your aquarium's response.",
        formatted_dosage, inputs.tank_volume, inputs.volume_unit, inputs.desired_ppm
    );

    Ok(FertilizerDose {
        dosage_ml,
        formatted_dosage,
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use aquadose_schemas::units::VolumeUnit;
    use proptest::prelude::*;

    fn inputs(volume: f64, unit: VolumeUnit, ppm: f64, conc: f64, kind: ConcentrationType) -> FertilizerInputs {
        FertilizerInputs {
            tank_volume: volume,
            volume_unit: unit,
            desired_ppm: ppm,
            product_concentration: conc,
            concentration_type: kind,
        }
    }

    #[test]
    fn ppm_product_in_liters() {
        let dose =
            calculate_fertilizer_dosing(&inputs(50.0, VolumeUnit::Liters, 10.0, 1000.0, ConcentrationType::Ppm))
                .unwrap();
        assert_relative_eq!(dose.dosage_ml, 0.5);
        assert_eq!(dose.formatted_dosage, "0.50 ml");
    }

    #[test]
    fn percentage_product_in_gallons() {
        let dose = calculate_fertilizer_dosing(&inputs(
            20.0,
            VolumeUnit::Gallons,
            10.0,
            5.0,
            ConcentrationType::Percentage,
        ))
        .unwrap();
        assert_relative_eq!(dose.dosage_ml, 10.0 * 20.0 * 3.78541 / 50_000.0, epsilon = 1e-12);
        assert_eq!(
            dose.instructions,
            "Add 0.02 ml of fertilizer solution to your 20 gallons tank to achieve 10 ppm. \
             Dose slowly and monitor your aquarium's response."
        );
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let err = calculate_fertilizer_dosing(&inputs(
            20.0,
            VolumeUnit::Gallons,
            0.0,
            -5.0,
            ConcentrationType::Percentage,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "Desired PPM must be a positive number");

        let err =
            calculate_fertilizer_dosing(&inputs(20.0, VolumeUnit::Gallons, 10.0, f64::NAN, ConcentrationType::Ppm))
                .unwrap_err();
        assert_eq!(err.to_string(), "Product concentration must be a positive number");
    }

    proptest! {
        #[test]
        fn dose_is_non_negative_and_linear_in_ppm(
            volume in 0.1f64..10_000.0,
            ppm in 0.01f64..1_000.0,
            conc in 0.01f64..100_000.0,
            percent in any::<bool>(),
        ) {
            let kind = if percent { ConcentrationType::Percentage } else { ConcentrationType::Ppm };
            let single = calculate_fertilizer_dosing(&inputs(volume, VolumeUnit::Gallons, ppm, conc, kind)).unwrap();
            let double = calculate_fertilizer_dosing(&inputs(volume, VolumeUnit::Gallons, ppm * 2.0, conc, kind)).unwrap();
            prop_assert!(single.dosage_ml >= 0.0);
            prop_assert!((double.dosage_ml - 2.0 * single.dosage_ml).abs() <= single.dosage_ml * 1e-12);
        }
    }
}
