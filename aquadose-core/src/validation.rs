//! Input checks shared by the calculators.
//!
//! Each check yields `Ok(())` or the message to show next to the offending
//! field. `NaN` fails every check.

use crate::error::ValidationError;

/// Fails when `value` is `NaN` or not strictly greater than zero.
pub fn validate_positive_number(value: f64, field_name: &str) -> Result<(), ValidationError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Fails when `value` is `NaN` or outside `[min, max]`.
pub fn validate_number_in_range(
    value: f64,
    min: f64,
    max: f64,
    field_name: &str,
) -> Result<(), ValidationError> {
    if value.is_nan() || value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field_name.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

/// Reads a number typed by the user. Anything that is not a finite number,
/// including an empty field, becomes `NaN` so validation rejects it.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_number_accepts_values_above_zero() {
        assert!(validate_positive_number(0.001, "Tank volume").is_ok());
        assert!(validate_positive_number(75.0, "Tank volume").is_ok());
    }

    #[test]
    fn positive_number_rejects_zero_negative_and_nan() {
        for bad in [0.0, -1.0, f64::NAN] {
            let err = validate_positive_number(bad, "Tank volume").unwrap_err();
            assert_eq!(err.to_string(), "Tank volume must be a positive number");
            assert_eq!(err.field(), "Tank volume");
        }
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        assert!(validate_number_in_range(1.0, 1.0, 30.0, "Treatment days").is_ok());
        assert!(validate_number_in_range(30.0, 1.0, 30.0, "Treatment days").is_ok());
        assert!(validate_number_in_range(0.99, 1.0, 30.0, "Treatment days").is_err());
        assert!(validate_number_in_range(30.5, 1.0, 30.0, "Treatment days").is_err());
    }

    #[test]
    fn range_message_prints_bounds_in_short_form() {
        let err = validate_number_in_range(31.0, 1.0, 30.0, "Treatment days").unwrap_err();
        assert_eq!(err.to_string(), "Treatment days must be between 1 and 30");

        let err = validate_number_in_range(1.2, 1.0, 1.05, "Current specific gravity").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Current specific gravity must be between 1 and 1.05"
        );
    }

    #[test]
    fn range_rejects_nan() {
        assert!(validate_number_in_range(f64::NAN, 0.0, 50.0, "Current salinity").is_err());
    }

    #[test]
    fn parse_number_maps_garbage_to_nan() {
        assert_eq!(parse_number(" 29 "), 29.0);
        assert_eq!(parse_number("1.025"), 1.025);
        assert!(parse_number("").is_nan());
        assert!(parse_number("ten").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(validate_positive_number(parse_number("ten"), "Tank volume").is_err());
    }
}
