// 🌡️ Temperature Converter - Formula-driven conversion
// Celsius/Fahrenheit/Kelvin conversions and cross-unit comparison.
// Not table-driven: Fahrenheit and Kelvin are affine, not multiplicative.

use crate::units::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TEMPERATURE UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    /// Parse a unit name, case-insensitively
    pub fn parse(unit: &str) -> Result<Self, ConversionError> {
        match unit.to_lowercase().as_str() {
            "celsius" => Ok(TempUnit::Celsius),
            "fahrenheit" => Ok(TempUnit::Fahrenheit),
            "kelvin" => Ok(TempUnit::Kelvin),
            _ => Err(ConversionError::InvalidUnit {
                unit: unit.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TempUnit::Celsius => "celsius",
            TempUnit::Fahrenheit => "fahrenheit",
            TempUnit::Kelvin => "kelvin",
        }
    }
}

// ============================================================================
// CONVERSION FORMULAS
// ============================================================================

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

/// Normalize a magnitude in any supported unit to celsius
fn to_celsius(value: f64, unit: TempUnit) -> f64 {
    match unit {
        TempUnit::Celsius => value,
        TempUnit::Fahrenheit => fahrenheit_to_celsius(value),
        TempUnit::Kelvin => kelvin_to_celsius(value),
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    LessThan,
    GreaterThan,
    EqualTo,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Comparison::LessThan => "less than",
            Comparison::GreaterThan => "greater than",
            Comparison::EqualTo => "equal to",
        };
        write!(f, "{}", s)
    }
}

/// Compare two temperatures given in possibly different units.
///
/// Both magnitudes are normalized to celsius first. The tie case uses exact
/// floating-point equality: values that are equal on paper but differ after
/// conversion rounding will compare as less/greater, not equal.
pub fn compare(
    temp1: f64,
    unit1: &str,
    temp2: f64,
    unit2: &str,
) -> Result<Comparison, ConversionError> {
    let celsius1 = to_celsius(temp1, TempUnit::parse(unit1)?);
    let celsius2 = to_celsius(temp2, TempUnit::parse(unit2)?);

    if celsius1 < celsius2 {
        Ok(Comparison::LessThan)
    } else if celsius1 > celsius2 {
        Ok(Comparison::GreaterThan)
    } else {
        Ok(Comparison::EqualTo)
    }
}

// ============================================================================
// TESTS
// ============================================================================
