use rust_decimal_macros::dec;

use super::{by_engine, by_price, with_surcharge};
use crate::modules::rto::models::{Assessment, FuelType, Jurisdiction, Levy, VehicleProfile};

pub fn delhi(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Delhi;
    let price = v.ex_showroom_price;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        FuelType::Diesel => Assessment::percentage(
            j,
            by_price(price, &[(600_000, dec!(5)), (1_000_000, dec!(8.75))], dec!(12.5)),
        ),
        _ => Assessment::percentage(
            j,
            by_price(price, &[(600_000, dec!(4)), (1_000_000, dec!(7))], dec!(10)),
        ),
    }
}

pub fn chandigarh(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Chandigarh,
        by_price(v.ex_showroom_price, &[(2_000_000, dec!(6))], dec!(8)),
    )
}

pub fn haryana(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::Haryana;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(
                v.ex_showroom_price,
                &[(600_000, dec!(5)), (2_000_000, dec!(8))],
                dec!(10),
            ),
        ),
    }
}

pub fn himachal_pradesh(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::HimachalPradesh;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(v.ex_showroom_price, &[(1_000_000, dec!(2.5))], dec!(3)),
        ),
    }
}

pub fn jammu_and_kashmir(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::JammuAndKashmir,
        by_price(v.ex_showroom_price, &[(1_000_000, dec!(9))], dec!(11)),
    )
}

pub fn punjab(v: &VehicleProfile) -> Assessment {
    Assessment::percentage(
        Jurisdiction::Punjab,
        by_price(v.ex_showroom_price, &[(1_500_000, dec!(9))], dec!(11)),
    )
}

/// Engine-capacity bands with a 12.5% surcharge on the base tax
pub fn rajasthan(v: &VehicleProfile) -> Assessment {
    let cc = v.engine_size_cc;
    let base = match v.fuel_type {
        FuelType::Diesel => by_engine(cc, &[(800, dec!(8)), (1200, dec!(10))], dec!(12)),
        _ => by_engine(cc, &[(800, dec!(6)), (1200, dec!(8))], dec!(10)),
    };

    Assessment::percentage(Jurisdiction::Rajasthan, with_surcharge(base, dec!(12.5)))
}

pub fn uttar_pradesh(v: &VehicleProfile) -> Assessment {
    let j = Jurisdiction::UttarPradesh;

    match v.fuel_type {
        FuelType::Electric => Assessment::exempt(j),
        _ => Assessment::percentage(
            j,
            by_price(v.ex_showroom_price, &[(1_000_000, dec!(8))], dec!(10)),
        ),
    }
}

/// Price-banded tax plus a flat green tax for diesel, petrol and CNG
pub fn uttarakhand(v: &VehicleProfile) -> Assessment {
    let percent = by_price(
        v.ex_showroom_price,
        &[(500_000, dec!(8)), (1_000_000, dec!(9))],
        dec!(10),
    );
    let assessment = Assessment::percentage(Jurisdiction::Uttarakhand, percent);

    match v.fuel_type {
        FuelType::Diesel => assessment.with_levy(Levy::green_tax(dec!(3000))),
        FuelType::Petrol | FuelType::Cng => assessment.with_levy(Levy::green_tax(dec!(1500))),
        _ => assessment,
    }
}
