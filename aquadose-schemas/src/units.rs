//! Enumerated unit selectors shared by the calculator inputs.
//!
//! Every selector serializes as its lowercase name (`"gallons"`, `"ppm"`,
//! `"sg"`, ...) and parses back from that name, ignoring case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a unit name does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseUnitError {}

/// Unit the tank volume is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Gallons,
    Liters,
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::Liters => "liters",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gallons" | "gallon" | "gal" => Ok(VolumeUnit::Gallons),
            "liters" | "liter" | "litres" | "litre" | "l" => Ok(VolumeUnit::Liters),
            _ => Err(ParseUnitError {
                kind: "volume unit",
                value: s.to_string(),
            }),
        }
    }
}

/// How a fertilizer product states its strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcentrationType {
    /// Percent by weight, e.g. `5` for a 5% solution.
    Percentage,
    /// Parts per million of the active nutrient.
    Ppm,
}

impl ConcentrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcentrationType::Percentage => "percentage",
            ConcentrationType::Ppm => "ppm",
        }
    }
}

impl fmt::Display for ConcentrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcentrationType {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" | "%" => Ok(ConcentrationType::Percentage),
            "ppm" => Ok(ConcentrationType::Ppm),
            _ => Err(ParseUnitError {
                kind: "concentration type",
                value: s.to_string(),
            }),
        }
    }
}

/// Scale used for salinity readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalinityUnit {
    /// Parts per thousand.
    Ppt,
    /// Specific gravity, 1.000 being fresh water.
    Sg,
}

impl SalinityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalinityUnit::Ppt => "ppt",
            SalinityUnit::Sg => "sg",
        }
    }
}

impl fmt::Display for SalinityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalinityUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ppt" => Ok(SalinityUnit::Ppt),
            "sg" => Ok(SalinityUnit::Sg),
            _ => Err(ParseUnitError {
                kind: "salinity unit",
                value: s.to_string(),
            }),
        }
    }
}

/// The four dosing calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Fertilizer,
    Medication,
    Conditioner,
    Salinity,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 4] = [
        CalculatorKind::Fertilizer,
        CalculatorKind::Medication,
        CalculatorKind::Conditioner,
        CalculatorKind::Salinity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Fertilizer => "fertilizer",
            CalculatorKind::Medication => "medication",
            CalculatorKind::Conditioner => "conditioner",
            CalculatorKind::Salinity => "salinity",
        }
    }

    /// Title shown next to saved calculations.
    pub fn label(&self) -> &'static str {
        match self {
            CalculatorKind::Fertilizer => "Fertilizer Dosing",
            CalculatorKind::Medication => "Medication Dosing",
            CalculatorKind::Conditioner => "Water Conditioner",
            CalculatorKind::Salinity => "Salinity/SG",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorKind {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseUnitError {
                kind: "calculator",
                value: s.to_string(),
            })
    }
}
