use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FuelType, Jurisdiction};
use crate::core::money::percent_of;

/// Vehicle attributes the road-tax tables depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ex_showroom_price: Decimal,
    pub fuel_type: FuelType,
    /// 0 when unknown or not applicable (electric)
    pub engine_size_cc: u32,
}

impl VehicleProfile {
    pub fn new(ex_showroom_price: Decimal, fuel_type: FuelType, engine_size_cc: u32) -> Self {
        Self {
            ex_showroom_price,
            fuel_type,
            engine_size_cc,
        }
    }
}

/// Base road tax selected by a jurisdiction rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TaxResult {
    /// Percentage of the ex-showroom price (e.g. `11` for 11%)
    Percentage(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal),
    /// Absolute amount in rupees, independent of price
    Fixed(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal),
}

impl TaxResult {
    /// Road tax in rupees for the given ex-showroom price
    pub fn amount(&self, price: Decimal) -> Decimal {
        match self {
            TaxResult::Percentage(percent) => percent_of(price, *percent),
            TaxResult::Fixed(amount) => *amount,
        }
    }

    pub fn is_exempt(&self) -> bool {
        match self {
            TaxResult::Percentage(value) | TaxResult::Fixed(value) => value.is_zero(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevyKind {
    /// Flat environmental levy charged on top of road tax
    GreenTax,
    /// TCS computed inside the tax branch by the legacy calculator
    InlineTcs,
}

/// Flat rupee amount added after the base tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levy {
    pub kind: LevyKind,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Levy {
    pub fn green_tax(amount: Decimal) -> Self {
        Self {
            kind: LevyKind::GreenTax,
            amount,
        }
    }

    pub fn inline_tcs(amount: Decimal) -> Self {
        Self {
            kind: LevyKind::InlineTcs,
            amount,
        }
    }
}

/// Outcome of evaluating one jurisdiction rule for one vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub jurisdiction: Jurisdiction,
    pub tax: TaxResult,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levies: Vec<Levy>,
}

impl Assessment {
    pub fn percentage(jurisdiction: Jurisdiction, percent: Decimal) -> Self {
        Self {
            jurisdiction,
            tax: TaxResult::Percentage(percent),
            levies: Vec::new(),
        }
    }

    pub fn fixed(jurisdiction: Jurisdiction, amount: Decimal) -> Self {
        Self {
            jurisdiction,
            tax: TaxResult::Fixed(amount),
            levies: Vec::new(),
        }
    }

    pub fn exempt(jurisdiction: Jurisdiction) -> Self {
        Self::percentage(jurisdiction, Decimal::ZERO)
    }

    pub fn with_levy(mut self, levy: Levy) -> Self {
        self.levies.push(levy);
        self
    }

    pub fn levy_total(&self) -> Decimal {
        self.levies.iter().map(|levy| levy.amount).sum()
    }

    /// Total RTO tax: base tax plus every flat levy
    pub fn total_tax(&self, price: Decimal) -> Decimal {
        self.tax.amount(price) + self.levy_total()
    }
}
