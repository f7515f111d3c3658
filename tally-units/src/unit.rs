//! Length units with conversion factors
//!
//! Meters are the base unit; every unit carries its meters-per-unit
//! factor. The set is fixed to what the conversion tab offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A length unit the conversion tab knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meters,
    Centimeters,
    Kilometers,
    Inches,
    Feet,
    Miles,
}

/// Every unit, in selection-list order
pub const ALL_UNITS: [LengthUnit; 6] = [
    LengthUnit::Meters,
    LengthUnit::Centimeters,
    LengthUnit::Kilometers,
    LengthUnit::Inches,
    LengthUnit::Feet,
    LengthUnit::Miles,
];

impl LengthUnit {
    /// Meters in one of this unit
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::Inches => 0.0254,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Miles => 1609.34,
        }
    }

    /// Display name, matching the selection-list labels
    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "Meters",
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Kilometers => "Kilometers",
            LengthUnit::Inches => "Inches",
            LengthUnit::Feet => "Feet",
            LengthUnit::Miles => "Miles",
        }
    }

    /// Short symbol
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Kilometers => "km",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
            LengthUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ConversionError;

    /// Accepts symbols, singular/plural names, and British spellings.
    /// Anything else is an explicit unknown-unit error, never a silent
    /// fallthrough.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meters),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(LengthUnit::Centimeters)
            }
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(LengthUnit::Kilometers)
            }
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            "mi" | "mile" | "miles" => Ok(LengthUnit::Miles),
            _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
        }
    }
}

/// Errors the conversion tab can surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Unit token is not in the registry
    UnknownUnit(String),
    /// Value text is not a number
    InvalidValue(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnknownUnit(unit) => write!(f, "Unknown unit: {}", unit),
            ConversionError::InvalidValue(_) => write!(f, "Invalid input"),
        }
    }
}

impl std::error::Error for ConversionError {}
