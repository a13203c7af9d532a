//! Unit conversions and the multi-unit display strings.

use aquadose_schemas::units::VolumeUnit;

pub const LITERS_PER_GALLON: f64 = 3.78541;
pub const ML_PER_TEASPOON: f64 = 4.92892;
pub const ML_PER_TABLESPOON: f64 = 14.7868;
pub const ML_PER_CUP: f64 = 236.588;
pub const GRAMS_PER_OUNCE: f64 = 28.3495;

pub fn gallons_to_liters(gallons: f64) -> f64 {
    gallons * LITERS_PER_GALLON
}

pub fn liters_to_gallons(liters: f64) -> f64 {
    liters / LITERS_PER_GALLON
}

pub fn ml_to_teaspoons(ml: f64) -> f64 {
    ml / ML_PER_TEASPOON
}

pub fn teaspoons_to_ml(tsp: f64) -> f64 {
    tsp * ML_PER_TEASPOON
}

pub fn ml_to_tablespoons(ml: f64) -> f64 {
    ml / ML_PER_TABLESPOON
}

pub fn tablespoons_to_ml(tbsp: f64) -> f64 {
    tbsp * ML_PER_TABLESPOON
}

pub fn ml_to_cups(ml: f64) -> f64 {
    ml / ML_PER_CUP
}

pub fn cups_to_ml(cups: f64) -> f64 {
    cups * ML_PER_CUP
}

pub fn grams_to_ounces(grams: f64) -> f64 {
    grams / GRAMS_PER_OUNCE
}

pub fn ounces_to_grams(ounces: f64) -> f64 {
    ounces * GRAMS_PER_OUNCE
}

/// Tank volume in liters, whatever unit it was entered in.
pub fn to_liters(volume: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Gallons => gallons_to_liters(volume),
        VolumeUnit::Liters => volume,
    }
}

/// Specific gravity to parts per thousand.
pub fn sg_to_ppt(sg: f64) -> f64 {
    (sg - 1.0) * 1000.0
}

pub fn ppt_to_sg(ppt: f64) -> f64 {
    ppt / 1000.0 + 1.0
}

/// `value` with exactly `digits` decimals, exact halves rounded away from
/// zero. `format!("{:.2}", 0.125)` gives "0.12"; this gives "0.13".
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Full decimal expansion of the binary value; 1100 places cover every f64.
    let exact = format!("{:.1100}", value);
    let tail = exact
        .split_once('.')
        .map_or("", |(_, frac)| frac)
        .get(digits..)
        .unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if is_tie {
        // One step further from zero pushes the tie past the midpoint.
        let nudged = f64::from_bits(value.to_bits() + 1);
        format!("{:.*}", digits, nudged)
    } else {
        format!("{:.*}", digits, value)
    }
}

pub fn format_volume(value: f64, unit: VolumeUnit) -> String {
    format!("{} {}", to_fixed(value, 2), unit)
}

/// Millilitres, followed by every kitchen measure the amount reaches.
///
/// `format_dosage(300.0)` gives `"300.00 ml / 60.87 tsp / 20.29 tbsp / 1.27 cups"`.
pub fn format_dosage(ml: f64) -> String {
    let mut parts = vec![format!("{} ml", to_fixed(ml, 2))];

    if ml >= ML_PER_TEASPOON {
        parts.push(format!("{} tsp", to_fixed(ml_to_teaspoons(ml), 2)));
    }
    if ml >= ML_PER_TABLESPOON {
        parts.push(format!("{} tbsp", to_fixed(ml_to_tablespoons(ml), 2)));
    }
    if ml >= ML_PER_CUP {
        parts.push(format!("{} cups", to_fixed(ml_to_cups(ml), 2)));
    }

    parts.join(" / ")
}

/// Grams, plus ounces once the amount reaches one ounce.
pub fn format_weight(grams: f64) -> String {
    let mut parts = vec![format!("{} g", to_fixed(grams, 2))];

    if grams >= GRAMS_PER_OUNCE {
        parts.push(format!("{} oz", to_fixed(grams_to_ounces(grams), 2)));
    }

    parts.join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn volume_conversion_uses_us_gallons() {
        assert_relative_eq!(gallons_to_liters(1.0), 3.78541);
        assert_relative_eq!(liters_to_gallons(37.8541), 10.0, epsilon = 1e-12);
        assert_relative_eq!(to_liters(20.0, VolumeUnit::Gallons), 75.7082, epsilon = 1e-9);
        assert_eq!(to_liters(20.0, VolumeUnit::Liters), 20.0);
    }

    #[test]
    fn kitchen_measures() {
        assert_relative_eq!(teaspoons_to_ml(3.0), tablespoons_to_ml(1.0), epsilon = 0.01);
        assert_relative_eq!(cups_to_ml(1.0), 236.588);
        assert_relative_eq!(ml_to_cups(236.588), 1.0);
        assert_relative_eq!(ounces_to_grams(grams_to_ounces(650.0)), 650.0, epsilon = 1e-9);
    }

    #[test]
    fn salinity_scales() {
        assert_relative_eq!(sg_to_ppt(1.025), 25.0, epsilon = 1e-9);
        assert_relative_eq!(ppt_to_sg(35.0), 1.035, epsilon = 1e-12);
    }

    #[test]
    fn small_dose_shows_only_ml() {
        assert_eq!(format_dosage(2.5), "2.50 ml");
        assert_eq!(format_dosage(0.0), "0.00 ml");
    }

    #[test]
    fn five_ml_adds_teaspoons_only() {
        let s = format_dosage(5.0);
        assert!(s.contains("5.00 ml"));
        assert!(s.contains("1.01 tsp"));
        assert!(!s.contains("tbsp"));
        assert!(!s.contains("cups"));
    }

    #[test]
    fn large_dose_shows_all_units() {
        let s = format_dosage(300.0);
        assert!(s.contains("300.00 ml"));
        assert!(s.contains(" tsp"));
        assert!(s.contains(" tbsp"));
        assert!(s.contains(" cups"));
        assert_eq!(s.split(" / ").count(), 4);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(format_dosage(ML_PER_TEASPOON), "4.93 ml / 1.00 tsp");
        assert!(format_weight(GRAMS_PER_OUNCE).ends_with(" / 1.00 oz"));
        assert_eq!(format_weight(28.0), "28.00 g");
    }

    #[test]
    fn weight_formatting() {
        assert_eq!(format_weight(10.0), "10.00 g");
        assert_eq!(format_weight(650.0), "650.00 g / 22.93 oz");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(20.25, 1), "20.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_dosage(0.125), "0.13 ml");
    }

    #[test]
    fn near_halves_follow_the_binary_value() {
        // 1.005 is stored just below 1.005.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.1, 2), "0.10");
        assert_eq!(to_fixed(22.928, 2), "22.93");
    }

    #[test]
    fn volume_formatting() {
        assert_eq!(format_volume(12.5, VolumeUnit::Liters), "12.50 liters");
    }

    proptest! {
        #[test]
        fn gallons_liters_round_trip(x in 1e-6f64..1e9) {
            let back = gallons_to_liters(liters_to_gallons(x));
            prop_assert!((back - x).abs() <= x * 1e-12);
            let back = liters_to_gallons(gallons_to_liters(x));
            prop_assert!((back - x).abs() <= x * 1e-12);
        }
    }
}
