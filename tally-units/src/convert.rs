//! Length conversion
//!
//! Two-stage pipeline through the meters base unit: normalize the
//! source value to meters, then project into the target unit.

use crate::unit::{ConversionError, LengthUnit};
use tally_core::format_sigfigs;

/// Significant digits the conversion tab displays
pub const RESULT_DIGITS: usize = 6;

/// Convert a value into meters
pub fn to_meters(value: f64, unit: LengthUnit) -> f64 {
    value * unit.meters_per_unit()
}

/// Convert a value in meters into the target unit
pub fn from_meters(meters: f64, unit: LengthUnit) -> f64 {
    meters / unit.meters_per_unit()
}

/// Convert between any two length units
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_meters(to_meters(value, from), to)
}

/// Run a conversion request as the conversion tab does: parse the
/// value and unit texts, convert, format to [`RESULT_DIGITS`]
/// significant digits. Failures come back as errors whose display
/// text is what the result field shows.
pub fn convert_text(value: &str, from: &str, to: &str) -> Result<String, ConversionError> {
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidValue(value.to_string()))?;
    let from: LengthUnit = from.parse()?;
    let to: LengthUnit = to.parse()?;
    Ok(format_sigfigs(convert(value, from, to), RESULT_DIGITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mile_to_meters() {
        let result = convert(1.0, LengthUnit::Miles, LengthUnit::Meters);
        assert!((result - 1609.34).abs() < 1e-9);
    }

    #[test]
    fn test_centimeters_to_meters() {
        assert_eq!(convert(100.0, LengthUnit::Centimeters, LengthUnit::Meters), 1.0);
    }

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert(2.5, LengthUnit::Feet, LengthUnit::Feet), 2.5);
    }

    #[test]
    fn test_feet_to_inches() {
        let result = convert(1.0, LengthUnit::Feet, LengthUnit::Inches);
        assert!((result - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilometers_to_miles() {
        let result = convert(5.0, LengthUnit::Kilometers, LengthUnit::Miles);
        assert!((result - 3.10686).abs() < 1e-4);
    }

    #[test]
    fn test_convert_text_formats_six_digits() {
        assert_eq!(
            convert_text("1", "miles", "meters").unwrap(),
            "1609.34"
        );
        assert_eq!(convert_text("100", "cm", "m").unwrap(), "1");
    }

    #[test]
    fn test_convert_text_invalid_value() {
        let err = convert_text("abc", "m", "cm").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn test_convert_text_unknown_unit() {
        let err = convert_text("1", "m", "cubits").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit(_)));
    }
}
