//! North-eastern states, including the two that charge a fixed amount by
//! engine capacity instead of a share of the price (Sikkim, Tripura).

use rust_decimal_macros::dec;

use super::{by_engine, by_price};
use crate::modules::rto::models::{Assessment, FuelType, Jurisdiction, VehicleProfile};

pub fn arunachal_pradesh(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::ArunachalPradesh;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(500_000, dec!(2.5)), (1_000_000, dec!(3))],
                dec!(4),
            ),
        ),
    }
}

pub fn assam(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Assam;

    match v.fuel_type {
        FuelType::Electric => Assessment::percentage(j, dec!(1)),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(300_000, dec!(3)), (1_500_000, dec!(4)), (2_000_000, dec!(5))],
                dec!(7),
            ),
        ),
    }
}

pub fn manipur(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Manipur,
        by_price(v.ex_showroom_price, &[(500_000, dec!(3))], dec!(4)),
    )
}

pub fn meghalaya(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Meghalaya;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(500_000, dec!(4)), (1_000_000, dec!(6))],
                dec!(8),
            ),
        ),
    }
}

pub fn mizoram(_v: &VehicleProfile) -> Assessment {
    Assessment::percentage(Jurisdiction::Mizoram, dec!(7))
}

pub fn nagaland(_v: &VehicleProfile) -> Assessment {
    Assessment::percentage(Jurisdiction::Nagaland, dec!(5))
}

pub fn sikkim(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Sikkim;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::fixed(
            j,
            by_engine(
                v.engine_size_cc,
                &[(1000, dec!(8000)), (1500, dec!(12000)), (2000, dec!(18000))],
                dec!(25000),
            ),
        ),
    }
}

pub fn tripura(v: &VehicleProfile) -> Assessment {
    Assessment::fixed(
        Jurisdiction::Tripura,
        by_engine(
            v.engine_size_cc,
            &[(1000, dec!(6000)), (1500, dec!(10000))],
            dec!(15000),
        ),
    )
}
