use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PriceBreakdown;
use crate::core::{AppError, Result};

/// Message shown to visitors when a variant cannot be priced
pub const PRICE_UNAVAILABLE_MESSAGE: &str = "Price details not available";

/// Where the buyer registers the vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    State(String),
    City(String),
}

impl Location {
    /// A state wins over a city when both are given; blank values count as absent
    pub fn from_parts(state: Option<&str>, city: Option<&str>) -> Result<Self> {
        let present = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        match (present(state), present(city)) {
            (Some(state), _) => Ok(Location::State(state)),
            (None, Some(city)) => Ok(Location::City(city)),
            (None, None) => Err(AppError::validation("Either state or city is required")),
        }
    }
}

/// Ad-hoc quote for a vehicle that is not (or not yet) in the CMS
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub ex_showroom_price: Option<Decimal>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub engine_size_cc: Option<u32>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub insurance: Option<Decimal>,
}

/// Per-variant result on listing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantQuote {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PriceBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VariantQuote {
    pub fn priced(slug: impl Into<String>, breakdown: PriceBreakdown) -> Self {
        Self {
            slug: slug.into(),
            display_price: Some(breakdown.display_total()),
            breakdown: Some(breakdown),
            error: None,
        }
    }

    pub fn unavailable(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            breakdown: None,
            display_price: None,
            error: Some(PRICE_UNAVAILABLE_MESSAGE.to_string()),
        }
    }
}
