use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel type as used by the road-tax tables
///
/// Parsing is case-insensitive. Values outside the four the tables
/// distinguish (hybrid, LPG, missing attribute, ...) become `Other` and
/// route into each jurisdiction's catch-all branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
    Electric,
    #[default]
    Other,
}

impl FuelType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "petrol" => FuelType::Petrol,
            "diesel" => FuelType::Diesel,
            "cng" => FuelType::Cng,
            "electric" => FuelType::Electric,
            _ => FuelType::Other,
        }
    }

    pub fn from_optional(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Cng => "cng",
            FuelType::Electric => "electric",
            FuelType::Other => "other",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
