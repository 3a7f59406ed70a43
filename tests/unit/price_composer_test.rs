// On-road price composition
//
// Verifies the breakdown invariants (total equals the sum of parts, fixed
// charges never change, TCS threshold is exclusive) for every jurisdiction
// and the failure path for unpriced variants.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use autoprice::core::AppError;
use autoprice::pricing::PriceComposer;
use autoprice::rto::{FuelType, Jurisdiction, RateResolver, RuleBook, TcsPolicy, VehicleProfile};
use autoprice::variants::VehicleVariant;

fn petrol(price: Decimal, engine_size_cc: u32) -> VehicleProfile {
    VehicleProfile::new(price, FuelType::Petrol, engine_size_cc)
}

#[test]
fn test_tcs_threshold_is_exclusive() {
    let composer = PriceComposer::default();

    let at_threshold = composer
        .calculate(&petrol(dec!(1000000), 1197), Decimal::ZERO, "goa")
        .unwrap();
    assert_eq!(at_threshold.tcs, Decimal::ZERO);

    let above_threshold = composer
        .calculate(&petrol(dec!(1000001), 1197), Decimal::ZERO, "goa")
        .unwrap();
    assert_eq!(above_threshold.tcs, dec!(10000.01));
}

#[test]
fn test_default_jurisdiction_breakdown() {
    let breakdown = PriceComposer::default()
        .calculate(&petrol(dec!(1200000), 1497), dec!(40000), "atlantis")
        .unwrap();

    assert_eq!(breakdown.rto_tax, dec!(120000));
    assert_eq!(breakdown.tcs, dec!(12000));
    assert_eq!(breakdown.total_on_road_price, dec!(1374000));
}

#[test]
fn test_fixed_amount_jurisdiction_breakdown() {
    let breakdown = PriceComposer::default()
        .calculate(&petrol(dec!(900000), 1197), dec!(30000), "Sikkim")
        .unwrap();

    assert_eq!(breakdown.rto_tax, dec!(12000));
    assert_eq!(breakdown.tcs, Decimal::ZERO);
    assert_eq!(breakdown.total_on_road_price, dec!(944000));
}

#[test]
fn test_green_tax_is_part_of_rto() {
    let vehicle = VehicleProfile::new(dec!(800000), FuelType::Diesel, 1497);
    let breakdown = PriceComposer::default()
        .calculate(&vehicle, Decimal::ZERO, "Uttarakhand")
        .unwrap();

    assert_eq!(breakdown.rto_tax, dec!(75000));
}

#[test]
fn test_legacy_policy_double_counts_tcs_in_flagged_states() {
    let legacy = PriceComposer::new(RateResolver::new(
        Arc::new(RuleBook::standard()),
        TcsPolicy::Legacy,
    ));
    let unified = PriceComposer::default();
    let vehicle = petrol(dec!(1500000), 1497);

    let legacy_breakdown = legacy.calculate(&vehicle, Decimal::ZERO, "Tamil Nadu").unwrap();
    let unified_breakdown = unified.calculate(&vehicle, Decimal::ZERO, "Tamil Nadu").unwrap();

    assert_eq!(unified_breakdown.rto_tax, dec!(300000));
    assert_eq!(legacy_breakdown.rto_tax, dec!(315000));
    assert_eq!(legacy_breakdown.tcs, unified_breakdown.tcs);
    assert_eq!(
        legacy_breakdown.total_on_road_price - unified_breakdown.total_on_road_price,
        dec!(15000)
    );
}

#[test]
fn test_unpriced_variant_fails_with_pricing_error() {
    let composer = PriceComposer::default();

    for price in [None, Some(Decimal::ZERO)] {
        let variant = VehicleVariant::new("upcoming", price, FuelType::Petrol, 1197, dec!(20000));
        let err = composer
            .calculate_on_road_price(&variant, "Delhi")
            .unwrap_err();

        assert!(matches!(err, AppError::Pricing(_)));
        assert!(err.to_string().starts_with("Error calculating on-road price: "));
    }
}

#[test]
fn test_oversized_amounts_are_rejected_not_overflowed() {
    let composer = PriceComposer::default();

    let result = composer.calculate(&petrol(Decimal::MAX, 1200), Decimal::ZERO, "tamil nadu");
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = composer.calculate(&petrol(dec!(800000), 1200), Decimal::MAX, "goa");
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = RateResolver::standard().resolve_rto_tax("goa", Decimal::MAX, "petrol", 1200);
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Largest accepted price still composes
    let breakdown = composer
        .calculate(&petrol(dec!(1000000000000), 1200), Decimal::ZERO, "kerala")
        .unwrap();
    assert_eq!(breakdown.tcs, dec!(10000000000));
}

#[test]
fn test_repeated_calls_serialize_identically() {
    let composer = PriceComposer::default();
    let variant = VehicleVariant::new(
        "creta-sx",
        Some(dec!(1459900)),
        FuelType::Diesel,
        1493,
        dec!(61234.56),
    );

    let first = composer.calculate_on_road_price(&variant, "kerala").unwrap();
    let second = composer.calculate_on_road_price(&variant, "kerala").unwrap();

    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

fn fuel_type_strategy() -> impl Strategy<Value = FuelType> {
    prop_oneof![
        Just(FuelType::Petrol),
        Just(FuelType::Diesel),
        Just(FuelType::Cng),
        Just(FuelType::Electric),
        Just(FuelType::Other),
    ]
}

proptest! {
    #[test]
    fn test_total_equals_sum_of_components(
        index in 0usize..Jurisdiction::ALL.len(),
        fuel_type in fuel_type_strategy(),
        price_paise in 100i64..500_000_000_00i64,
        insurance_paise in 0i64..20_000_000i64,
        engine_size_cc in 0u32..6000u32,
    ) {
        let composer = PriceComposer::default();
        let vehicle = VehicleProfile::new(Decimal::new(price_paise, 2), fuel_type, engine_size_cc);
        let insurance = Decimal::new(insurance_paise, 2);

        let breakdown = composer
            .calculate(&vehicle, insurance, Jurisdiction::ALL[index].key())
            .unwrap();

        prop_assert_eq!(
            breakdown.total_on_road_price,
            breakdown.ex_showroom_price
                + breakdown.rto_tax
                + breakdown.insurance
                + breakdown.tcs
                + breakdown.hypothecation_charges
                + breakdown.fastag_charges
        );
    }

    #[test]
    fn test_fixed_charges_are_constant(
        jurisdiction in "[a-zA-Z -]{0,24}",
        price in 1i64..50_000_000i64,
    ) {
        let breakdown = PriceComposer::default()
            .calculate(&petrol(Decimal::from(price), 1197), Decimal::ZERO, &jurisdiction)
            .unwrap();

        prop_assert_eq!(breakdown.hypothecation_charges, dec!(1500));
        prop_assert_eq!(breakdown.fastag_charges, dec!(500));
    }

    #[test]
    fn test_tcs_is_one_percent_above_threshold_only(price in 1i64..50_000_000i64) {
        let breakdown = PriceComposer::default()
            .calculate(&petrol(Decimal::from(price), 1197), Decimal::ZERO, "punjab")
            .unwrap();

        if price > 1_000_000 {
            prop_assert_eq!(breakdown.tcs, (Decimal::from(price) / dec!(100)).round_dp(2));
        } else {
            prop_assert_eq!(breakdown.tcs, Decimal::ZERO);
        }
    }
}
