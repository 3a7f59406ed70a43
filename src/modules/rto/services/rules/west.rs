use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::by_price;
use crate::modules::rto::models::{Assessment, FuelType, Jurisdiction, VehicleProfile};

pub fn goa(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Goa;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(v.ex_showroom_price, &[(1_000_000, dec!(9))], dec!(11)),
        ),
    }
}

pub fn gujarat(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Gujarat;

    match v.fuel_type {
        FuelType::Electric => Assessment::percentage(j, dec!(1)),
        _ => Assessment::percentage(j, dec!(6)),
    }
}

pub fn maharashtra(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Maharashtra;
    let price = v.ex_showroom_price;
    let bands = |low: Decimal, mid: Decimal, high: Decimal| {
        by_price(price, &[(1_000_000, low), (2_000_000, mid)], high)
    };

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        FuelType::Diesel => Assessment::percentage(j, bands(dec!(13), dec!(14), dec!(15))),
        FuelType::Cng => Assessment::percentage(j, bands(dec!(7), dec!(8), dec!(9))),
        FuelType::Petrol | FuelType::Other => {
            Assessment::percentage(j, bands(dec!(11), dec!(12), dec!(13)))
        }
    }
}
