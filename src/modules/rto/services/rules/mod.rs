//! Per-jurisdiction road-tax rules
//!
//! Every rule has the same shape, `fn(&VehicleProfile) -> Assessment`, and
//! must return an assessment for every input: each fuel-type match ends in
//! a catch-all arm and every band lookup ends in an `above` value.
//!
//! Band bounds are inclusive upper bounds (`price <= bound`,
//! `engine_size_cc <= bound`). Rules never apply TCS themselves; the price
//! composer adds it once for every jurisdiction.

pub mod central_east;
pub mod north;
pub mod northeast;
pub mod south;
pub mod west;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::modules::rto::models::{Assessment, Jurisdiction, VehicleProfile};

/// Signature shared by every jurisdiction rule
pub type TaxRule = fn(&VehicleProfile) -> Assessment;

/// Picks the value of the first price band whose upper bound (in rupees)
/// is not below `price`
pub fn by_price(price: Decimal, bands: &[(i64, Decimal)], above: Decimal) -> Decimal {
    bands
        .iter()
        .find(|(bound, _)| price <= Decimal::from(*bound))
        .map(|(_, value)| *value)
        .unwrap_or(above)
}

/// Engine-capacity counterpart of [`by_price`]
pub fn by_engine(engine_size_cc: u32, bands: &[(u32, Decimal)], above: Decimal) -> Decimal {
    bands
        .iter()
        .find(|(bound, _)| engine_size_cc <= *bound)
        .map(|(_, value)| *value)
        .unwrap_or(above)
}

/// Adds a percentage-of-base surcharge to a base rate: `base × (1 + surcharge%)`
pub fn with_surcharge(base: Decimal, surcharge_percent: Decimal) -> Decimal {
    base + base * surcharge_percent / Decimal::ONE_HUNDRED
}

/// Rule for jurisdictions without a table of their own: 10% of price
pub fn default_rule(_vehicle: &VehicleProfile) -> Assessment {
    Assessment::percentage(Jurisdiction::Default, dec!(10))
}
