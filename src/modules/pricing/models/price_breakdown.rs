use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{format_lakh_crore, round_inr};

/// Hypothecation (loan endorsement) charge on the registration certificate, rupees
pub const HYPOTHECATION_CHARGES: i64 = 1500;

/// FASTag issuance charge, rupees
pub const FASTAG_CHARGES: i64 = 500;

/// On-road price breakdown for one variant in one jurisdiction
///
/// Every component is rounded to paise before `total_on_road_price` is
/// summed, so the total always equals the sum of the displayed parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ex_showroom_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rto_tax: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub insurance: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub tcs: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub hypothecation_charges: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fastag_charges: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_on_road_price: Decimal,
}

impl PriceBreakdown {
    pub fn new(ex_showroom_price: Decimal, rto_tax: Decimal, insurance: Decimal, tcs: Decimal) -> Self {
        let mut breakdown = Self {
            ex_showroom_price: round_inr(ex_showroom_price),
            rto_tax: round_inr(rto_tax),
            insurance: round_inr(insurance),
            tcs: round_inr(tcs),
            hypothecation_charges: Decimal::from(HYPOTHECATION_CHARGES),
            fastag_charges: Decimal::from(FASTAG_CHARGES),
            total_on_road_price: Decimal::ZERO,
        };
        breakdown.total_on_road_price = breakdown.components_sum();
        breakdown
    }

    /// Listing-card label for the total, e.g. `9.78 Lakh`
    pub fn display_total(&self) -> String {
        format_lakh_crore(self.total_on_road_price)
    }

    pub fn components_sum(&self) -> Decimal {
        self.ex_showroom_price
            + self.rto_tax
            + self.insurance
            + self.tcs
            + self.hypothecation_charges
            + self.fastag_charges
    }
}
