use rust_decimal_macros::dec;

use super::{by_price, with_surcharge};
use crate::modules::rto::models::{Assessment, FuelType, Jurisdiction, VehicleProfile};

pub fn andhra_pradesh(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::AndhraPradesh;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(v.ex_showroom_price, &[(1_000_000, dec!(12))], dec!(14)),
        ),
    }
}

/// Lifetime tax plus an 11% cess charged on the base tax
pub fn karnataka(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Karnataka;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => {
            let base = by_price(
                v.ex_showroom_price,
                &[(500_000, dec!(13)), (1_000_000, dec!(14)), (2_000_000, dec!(17))],
                dec!(18),
            );
            Assessment::percentage(j, with_surcharge(base, dec!(11)))
        }
    }
}

pub fn kerala(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Kerala;

    match v.fuel_type {
        FuelType::Electric => Assessment::percentage(j, dec!(5)),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[
                    (500_000, dec!(9)),
                    (1_000_000, dec!(11)),
                    (1_500_000, dec!(13)),
                    (2_000_000, dec!(16)),
                ],
                dec!(21),
            ),
        ),
    }
}

pub fn puducherry(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Puducherry,
        by_price(v.ex_showroom_price, &[(1_000_000, dec!(6))], dec!(8)),
    )
}

pub fn tamil_nadu(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::TamilNadu;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(v.ex_showroom_price, &[(1_000_000, dec!(15))], dec!(20)),
        ),
    }
}

pub fn telangana(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Telangana;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(500_000, dec!(13)), (1_000_000, dec!(14)), (2_000_000, dec!(17))],
                dec!(18),
            ),
        ),
    }
}
