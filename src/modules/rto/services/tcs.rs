use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::money::percent_of;

/// TCS applies to vehicles priced strictly above ₹10 lakh
pub const TCS_THRESHOLD: i64 = 1_000_000;

/// TCS rate, percent of ex-showroom price
pub const TCS_PERCENT: i64 = 1;

/// Tax Collected at Source for an ex-showroom price
pub fn tcs_for(price: Decimal) -> Decimal {
    if price > Decimal::from(TCS_THRESHOLD) {
        percent_of(price, Decimal::from(TCS_PERCENT))
    } else {
        Decimal::ZERO
    }
}

/// Where TCS is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TcsPolicy {
    /// Charged once, by the price composer
    #[default]
    Unified,
    /// Also charged inside the jurisdiction branches that historically
    /// computed it inline, reproducing the legacy double count
    Legacy,
}

impl fmt::Display for TcsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TcsPolicy::Unified => write!(f, "unified"),
            TcsPolicy::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for TcsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unified" => Ok(TcsPolicy::Unified),
            "legacy" => Ok(TcsPolicy::Legacy),
            _ => Err(format!("Invalid TCS policy: {}", s)),
        }
    }
}
