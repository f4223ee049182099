// 📏 Unit Conversion Engine - Table-driven conversion
// Length, weight and volume conversions via fixed base-unit tables

use std::fmt;

// ============================================================================
// CONVERSION TABLES
// ============================================================================

// Each domain normalizes to one base unit (factor 1.0). Keys are stored
// lowercase; lookup normalizes case so "Feet" and "FEET" resolve to the
// same entry. Domains never cross-convert.

/// Length factors into meters
const TO_METERS: &[(&str, f64)] = &[("meters", 1.0), ("inches", 0.0254), ("feet", 0.3048)];

/// Weight factors into kilograms
const TO_KILOGRAMS: &[(&str, f64)] = &[("kg", 1.0), ("lbs", 0.453592), ("ounces", 0.0283495)];

/// Volume factors into liters
const TO_LITERS: &[(&str, f64)] = &[("liters", 1.0), ("gallons", 3.78541), ("cups", 0.24)];

/// Supported unit names per domain, in the order they are reported
const LENGTH_UNITS: &[&str] = &["meters", "feet", "inches"];
const WEIGHT_UNITS: &[&str] = &["kg", "lbs", "ounces"];
const VOLUME_UNITS: &[&str] = &["liters", "gallons", "cups"];

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Unit name not present in the domain's table
    UnsupportedUnit { unit: String, domain: &'static str },
    /// Unit-list request for an unknown domain
    InvalidDomain { domain: String },
    /// Temperature unit outside celsius/fahrenheit/kelvin
    InvalidUnit { unit: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnsupportedUnit { unit, domain } => {
                write!(f, "Unsupported {} unit: '{}'", domain, unit)
            }
            ConversionError::InvalidDomain { domain } => {
                write!(
                    f,
                    "Invalid type '{}'. Valid types are length, weight, volume.",
                    domain
                )
            }
            ConversionError::InvalidUnit { unit } => {
                write!(
                    f,
                    "Invalid temperature unit '{}'. Valid units are celsius, fahrenheit, kelvin.",
                    unit
                )
            }
        }
    }
}

impl std::error::Error for ConversionError {}

// ============================================================================
// CONVERSION ENGINE
// ============================================================================

fn lookup(table: &[(&str, f64)], unit: &str, domain: &'static str) -> Result<f64, ConversionError> {
    let unit_lower = unit.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == unit_lower)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ConversionError::UnsupportedUnit {
            unit: unit.to_string(),
            domain,
        })
}

fn convert(
    table: &[(&str, f64)],
    value: f64,
    from_unit: &str,
    to_unit: &str,
    domain: &'static str,
) -> Result<f64, ConversionError> {
    let from_factor = lookup(table, from_unit, domain)?;
    let to_factor = lookup(table, to_unit, domain)?;

    let value_in_base = value * from_factor;
    Ok(value_in_base / to_factor)
}

/// Convert a length between meters, feet and inches
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    convert(TO_METERS, value, from_unit, to_unit, "length")
}

/// Convert a weight between kg, lbs and ounces
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    convert(TO_KILOGRAMS, value, from_unit, to_unit, "weight")
}

/// Convert a volume between liters, gallons and cups
pub fn convert_volume(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    convert(TO_LITERS, value, from_unit, to_unit, "volume")
}

/// List the supported unit names for a domain (length, weight or volume)
pub fn list_units(domain: &str) -> Result<Vec<String>, ConversionError> {
    let units = match domain.to_lowercase().as_str() {
        "length" => LENGTH_UNITS,
        "weight" => WEIGHT_UNITS,
        "volume" => VOLUME_UNITS,
        _ => {
            return Err(ConversionError::InvalidDomain {
                domain: domain.to_string(),
            })
        }
    };

    Ok(units.iter().map(|u| u.to_string()).collect())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_feet_to_meters() {
        let result = convert_length(100.0, "feet", "meters").unwrap();
        assert!(approx_eq(result, 30.48));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let a = convert_length(12.0, "Inches", "FEET").unwrap();
        let b = convert_length(12.0, "inches", "feet").unwrap();
        assert!(approx_eq(a, b));
        assert!(approx_eq(a, 1.0));
    }

    #[test]
    fn test_identity_conversion() {
        let result = convert_weight(42.5, "lbs", "lbs").unwrap();
        assert!(approx_eq(result, 42.5));
    }

    #[test]
    fn test_round_trip_law() {
        // convert(convert(v, a, b), b, a) ≈ v for every unit pair
        for &(a, _) in TO_LITERS {
            for &(b, _) in TO_LITERS {
                let there = convert_volume(7.3, a, b).unwrap();
                let back = convert_volume(there, b, a).unwrap();
                assert!(approx_eq(back, 7.3), "round trip failed for {} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_weight_conversion() {
        let result = convert_weight(1.0, "kg", "lbs").unwrap();
        assert!(approx_eq(result, 1.0 / 0.453592));
    }

    #[test]
    fn test_volume_conversion() {
        let result = convert_volume(1.0, "gallons", "cups").unwrap();
        assert!(approx_eq(result, 3.78541 / 0.24));
    }

    #[test]
    fn test_unsupported_unit() {
        let err = convert_length(1.0, "yards", "meters").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedUnit {
                unit: "yards".to_string(),
                domain: "length",
            }
        );

        // Target unit is checked too
        assert!(convert_length(1.0, "meters", "furlongs").is_err());
    }

    #[test]
    fn test_domains_never_cross() {
        // "kg" belongs to weight, not length
        assert!(convert_length(1.0, "kg", "meters").is_err());
        assert!(convert_volume(1.0, "feet", "liters").is_err());
    }

    #[test]
    fn test_list_units() {
        assert_eq!(list_units("length").unwrap(), vec!["meters", "feet", "inches"]);
        assert_eq!(list_units("weight").unwrap(), vec!["kg", "lbs", "ounces"]);
        assert_eq!(list_units("volume").unwrap(), vec!["liters", "gallons", "cups"]);
    }

    #[test]
    fn test_list_units_case_insensitive() {
        assert_eq!(list_units("Length").unwrap(), list_units("length").unwrap());
    }

    #[test]
    fn test_list_units_invalid_domain() {
        let err = list_units("pressure").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidDomain {
                domain: "pressure".to_string(),
            }
        );
    }

    #[test]
    fn test_base_unit_maps_to_one() {
        for table in [TO_METERS, TO_KILOGRAMS, TO_LITERS] {
            assert!(table.iter().any(|(_, f)| *f == 1.0));
        }
    }
}
