// Road-tax resolution across jurisdictions
//
// Covers the documented boundary cases (price bands, EV exemptions, cess
// composition, fixed amounts, default fallback) and property tests that
// every jurisdiction yields a usable tax for every input.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use autoprice::core::AppError;
use autoprice::rto::models::LevyKind;
use autoprice::rto::{
    FuelType, Jurisdiction, RateResolver, RuleBook, TaxResult, TcsPolicy, VehicleProfile,
};

fn vehicle(price: i64, fuel_type: FuelType, engine_size_cc: u32) -> VehicleProfile {
    VehicleProfile::new(Decimal::from(price), fuel_type, engine_size_cc)
}

fn resolve(jurisdiction: &str, price: i64, fuel_type: &str, engine_size_cc: u32) -> Decimal {
    RateResolver::standard()
        .resolve_rto_tax(jurisdiction, Decimal::from(price), fuel_type, engine_size_cc)
        .unwrap()
}

#[test]
fn test_andhra_pradesh_exempts_electric_at_any_price() {
    let resolver = RateResolver::standard();

    for price in [300_000, 1_000_000, 1_000_001, 4_500_000] {
        let assessment = resolver
            .assess("andhra-pradesh", &vehicle(price, FuelType::Electric, 0))
            .unwrap();
        assert_eq!(assessment.tax, TaxResult::Percentage(Decimal::ZERO));
        assert!(assessment.tax.is_exempt());
    }
}

#[test]
fn test_maharashtra_petrol_band_boundary() {
    let resolver = RateResolver::standard();

    let at_bound = resolver
        .assess("Maharashtra", &vehicle(1_000_000, FuelType::Petrol, 1197))
        .unwrap();
    assert_eq!(at_bound.tax, TaxResult::Percentage(dec!(11)));

    let above_bound = resolver
        .assess("Maharashtra", &vehicle(1_000_001, FuelType::Petrol, 1197))
        .unwrap();
    assert_eq!(above_bound.tax, TaxResult::Percentage(dec!(12)));
}

#[test]
fn test_unknown_jurisdiction_falls_back_to_default_rule() {
    let resolver = RateResolver::standard();
    let assessment = resolver
        .assess("atlantis", &vehicle(900_000, FuelType::Petrol, 1200))
        .unwrap();

    assert_eq!(assessment.jurisdiction, Jurisdiction::Default);
    assert_eq!(assessment.tax, TaxResult::Percentage(dec!(10)));
    assert_eq!(resolve("atlantis", 900_000, "petrol", 1200), dec!(90000));
}

#[test]
fn test_karnataka_cess_is_folded_into_percentage() {
    let resolver = RateResolver::standard();
    let assessment = resolver
        .assess("karnataka", &vehicle(500_000, FuelType::Petrol, 1197))
        .unwrap();

    assert_eq!(assessment.tax, TaxResult::Percentage(dec!(14.43)));
    assert_eq!(resolve("karnataka", 500_000, "petrol", 1197), dec!(72150));
}

#[test]
fn test_jurisdiction_spelling_does_not_change_result() {
    let spellings = ["Tamil Nadu", "tamil-nadu", "  TAMIL_NADU ", "tamilnadu"];
    let expected = resolve("tamil-nadu", 1_250_000, "diesel", 1493);

    for spelling in spellings {
        assert_eq!(resolve(spelling, 1_250_000, "diesel", 1493), expected, "{}", spelling);
    }
}

#[test]
fn test_fuel_type_is_case_insensitive_and_defaults_to_other() {
    assert_eq!(
        resolve("maharashtra", 800_000, "DIESEL", 1497),
        resolve("maharashtra", 800_000, "diesel", 1497)
    );
    // Hybrid is not in the tables and takes the catch-all branch
    assert_eq!(resolve("maharashtra", 800_000, "hybrid", 1497), dec!(88000));
    assert_eq!(resolve("maharashtra", 800_000, "", 1497), dec!(88000));
}

#[test]
fn test_fixed_amount_states_ignore_price() {
    let cheap = resolve("sikkim", 500_000, "petrol", 1197);
    let expensive = resolve("sikkim", 1_800_000, "petrol", 1197);
    assert_eq!(cheap, dec!(12000));
    assert_eq!(cheap, expensive);

    let assessment = RateResolver::standard()
        .assess("Tripura", &vehicle(700_000, FuelType::Diesel, 999))
        .unwrap();
    assert_eq!(assessment.tax, TaxResult::Fixed(dec!(6000)));
}

#[test]
fn test_missing_engine_size_uses_lowest_engine_band() {
    assert_eq!(resolve("sikkim", 900_000, "petrol", 0), dec!(8000));
    // Rajasthan petrol up to 800 cc: 6% plus 12.5% surcharge
    assert_eq!(resolve("rajasthan", 400_000, "petrol", 0), dec!(27000));
}

#[test]
fn test_uttarakhand_green_tax_is_added_to_rto() {
    let assessment = RateResolver::standard()
        .assess("uttarakhand", &vehicle(800_000, FuelType::Diesel, 1497))
        .unwrap();

    assert_eq!(assessment.tax, TaxResult::Percentage(dec!(9)));
    assert_eq!(assessment.levies.len(), 1);
    assert_eq!(assessment.levies[0].kind, LevyKind::GreenTax);
    assert_eq!(resolve("uttarakhand", 800_000, "diesel", 1497), dec!(75000));
}

#[test]
fn test_negative_price_is_rejected() {
    let result = RateResolver::standard().resolve_rto_tax("delhi", dec!(-100), "petrol", 1197);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_legacy_policy_only_touches_inline_tcs_branches() {
    let legacy = RateResolver::new(Arc::new(RuleBook::standard()), TcsPolicy::Legacy);
    let unified = RateResolver::standard();
    let price = Decimal::from(1_500_000);

    for state in ["tamil nadu", "west bengal", "uttarakhand", "atlantis"] {
        let legacy_tax = legacy.resolve_rto_tax(state, price, "petrol", 1497).unwrap();
        let unified_tax = unified.resolve_rto_tax(state, price, "petrol", 1497).unwrap();
        assert_eq!(legacy_tax - unified_tax, dec!(15000), "{}", state);
    }

    for state in ["maharashtra", "karnataka", "delhi"] {
        let legacy_tax = legacy.resolve_rto_tax(state, price, "petrol", 1497).unwrap();
        let unified_tax = unified.resolve_rto_tax(state, price, "petrol", 1497).unwrap();
        assert_eq!(legacy_tax, unified_tax, "{}", state);
    }
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
    fn test_every_jurisdiction_resolves_for_every_input(
        index in 0usize..Jurisdiction::ALL.len(),
        fuel_type in fuel_type_strategy(),
        price in 1i64..50_000_000i64,
        engine_size_cc in 0u32..6000u32,
    ) {
        let resolver = RateResolver::standard();
        let jurisdiction = Jurisdiction::ALL[index];
        let vehicle = vehicle(price, fuel_type, engine_size_cc);

        let assessment = resolver.assess_jurisdiction(jurisdiction, &vehicle);
        prop_assert!(assessment.is_ok());
        let assessment = assessment.unwrap();

        if let TaxResult::Percentage(percent) = assessment.tax {
            prop_assert!(percent >= Decimal::ZERO && percent <= Decimal::ONE_HUNDRED);
        }
        prop_assert!(assessment.total_tax(vehicle.ex_showroom_price) >= Decimal::ZERO);
    }

    #[test]
    fn test_resolution_is_deterministic(
        index in 0usize..Jurisdiction::ALL.len(),
        price in 1i64..50_000_000i64,
        engine_size_cc in 0u32..6000u32,
    ) {
        let resolver = RateResolver::standard();
        let name = Jurisdiction::ALL[index].key();

        let first = resolver.resolve_rto_tax(name, Decimal::from(price), "petrol", engine_size_cc);
        let second = resolver.resolve_rto_tax(name, Decimal::from(price), "petrol", engine_size_cc);
        prop_assert_eq!(first.unwrap(), second.unwrap());
    }
}
