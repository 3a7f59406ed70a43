use rust_decimal_macros::dec;

use super::by_price;
use crate::modules::rto::models::{Assessment, FuelType, Jurisdiction, VehicleProfile};

pub fn bihar(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Bihar;

    match v.fuel_type {
        FuelType::Electric => Assessment::percentage(j, dec!(4)),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(800_000, dec!(8)), (1_500_000, dec!(10))],
                dec!(12),
            ),
        ),
    }
}

pub fn chhattisgarh(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Chhattisgarh,
        by_price(v.ex_showroom_price, &[(500_000, dec!(8))], dec!(9)),
    )
}

pub fn jharkhand(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Jharkhand,
        by_price(v.ex_showroom_price, &[(500_000, dec!(3))], dec!(4)),
    )
}

pub fn madhya_pradesh(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::MadhyaPradesh;
    let price = v.ex_showroom_price;

    match v.fuel_type {
        FuelType::Diesel => {
            Assessment::percentage(j, by_price(price, &[(1_000_000, dec!(10))], dec!(14)))
        }
        _ => Assessment::percentage(j, by_price(price, &[(1_000_000, dec!(8))], dec!(12))),
    }
}

pub fn odisha(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Odisha,
        by_price(
            v.ex_showroom_price,
            &[(500_000, dec!(6)), (1_000_000, dec!(8))],
            dec!(10),
        ),
    )
}

pub fn west_bengal(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::WestBengal;

    match v.fuel_type {
        FuelType::Electric => Assessment::percentage(j, dec!(2)),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(1_000_000, dec!(10)), (2_000_000, dec!(12))],
                dec!(14),
            ),
        ),
    }
}
