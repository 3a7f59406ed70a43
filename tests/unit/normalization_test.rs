// Boundary normalization
//
// Free-text state names, fuel types, CMS payload values and page locations
// are converted into typed values before any rule lookup.

use proptest::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;

use autoprice::core::AppError;
use autoprice::locations::{CityDirectory, StateLocator};
use autoprice::pricing::Location;
use autoprice::rto::{FuelType, Jurisdiction};
use autoprice::variants::models::{parse_engine_size, CmsVariantPayload};
use autoprice::variants::VehicleVariant;

#[test]
fn test_state_names_in_any_spelling() {
    let cases = [
        ("Andhra Pradesh", Jurisdiction::AndhraPradesh),
        ("ANDHRA-PRADESH", Jurisdiction::AndhraPradesh),
        ("jammu & kashmir", Jurisdiction::JammuAndKashmir),
        ("Jammu and Kashmir", Jurisdiction::JammuAndKashmir),
        ("  west   bengal ", Jurisdiction::WestBengal),
        ("uttar_pradesh", Jurisdiction::UttarPradesh),
        ("New Delhi", Jurisdiction::Delhi),
        ("Orissa", Jurisdiction::Odisha),
        ("Pondicherry", Jurisdiction::Puducherry),
    ];

    for (name, expected) in cases {
        assert_eq!(Jurisdiction::from_name(name), expected, "{}", name);
    }
}

#[test]
fn test_unknown_or_empty_state_is_default() {
    assert_eq!(Jurisdiction::from_name("atlantis"), Jurisdiction::Default);
    assert_eq!(Jurisdiction::from_name(""), Jurisdiction::Default);
    assert_eq!(Jurisdiction::from_name("   "), Jurisdiction::Default);
}

#[test]
fn test_canonical_keys_round_trip() {
    for jurisdiction in Jurisdiction::ALL {
        assert_eq!(Jurisdiction::from_key(jurisdiction.key()), Some(jurisdiction));
        assert_eq!(
            serde_json::to_value(jurisdiction).unwrap(),
            json!(jurisdiction.key())
        );
    }
}

#[test]
fn test_fuel_type_parsing() {
    assert_eq!(FuelType::parse("Petrol"), FuelType::Petrol);
    assert_eq!(FuelType::parse(" DIESEL "), FuelType::Diesel);
    assert_eq!(FuelType::parse("CNG"), FuelType::Cng);
    assert_eq!(FuelType::parse("Electric"), FuelType::Electric);
    assert_eq!(FuelType::parse("Hybrid"), FuelType::Other);
    assert_eq!(FuelType::from_optional(None), FuelType::Other);
}

#[test]
fn test_engine_size_attribute_parsing() {
    assert_eq!(parse_engine_size("1197 cc"), 1197);
    assert_eq!(parse_engine_size("1,498cc"), 1498);
    assert_eq!(parse_engine_size("2184"), 2184);
    assert_eq!(parse_engine_size("N/A"), 0);
    assert_eq!(parse_engine_size(""), 0);
}

#[test]
fn test_payload_without_attributes_uses_fallbacks() {
    let payload: CmsVariantPayload = serde_json::from_value(json!({ "price": "6,49,000" })).unwrap();
    let variant = VehicleVariant::from_payload("alto-k10", &payload).unwrap();

    assert_eq!(variant.slug, "alto-k10");
    assert_eq!(variant.ex_showroom_price, Some(dec!(649000)));
    assert_eq!(variant.fuel_type, FuelType::Other);
    assert_eq!(variant.engine_size_cc, 0);
    assert_eq!(variant.insurance_premium, dec!(0));
}

#[test]
fn test_payload_with_blank_price_is_unpriced() {
    for price in [json!(""), json!(null), json!(0)] {
        let payload: CmsVariantPayload =
            serde_json::from_value(json!({ "price": price, "attributes": [] })).unwrap();
        let variant = VehicleVariant::from_payload("upcoming", &payload).unwrap();
        assert!(variant.profile().is_none());
    }
}

#[test]
fn test_payload_with_garbage_price_is_cms_error() {
    let payload: CmsVariantPayload =
        serde_json::from_value(json!({ "price": "call for price" })).unwrap();
    let result = VehicleVariant::from_payload("mystery", &payload);
    assert!(matches!(result, Err(AppError::Cms(_))));
}

#[test]
fn test_location_prefers_state_over_city() {
    assert_eq!(
        Location::from_parts(Some("Goa"), Some("Pune")).unwrap(),
        Location::State("Goa".to_string())
    );
    assert_eq!(
        Location::from_parts(Some("  "), Some("Pune")).unwrap(),
        Location::City("Pune".to_string())
    );
    assert!(matches!(
        Location::from_parts(None, Some("")),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_city_directory_lookup() {
    let directory = CityDirectory::new();

    assert_eq!(directory.state_for_city("Pune"), Some("Maharashtra"));
    assert_eq!(directory.state_for_city("  BENGALURU "), Some("Karnataka"));
    assert_eq!(directory.state_for_city("Gotham"), None);
    // Every directory state must map to a rule of its own
    for state in ["Maharashtra", "Karnataka", "Tamil Nadu", "Sikkim", "West Bengal"] {
        assert_ne!(Jurisdiction::from_name(state), Jurisdiction::Default);
    }
}

proptest! {
    #[test]
    fn test_normalization_is_idempotent(name in "[ a-zA-Z&_-]{0,32}") {
        let once = Jurisdiction::normalize_key(&name);
        prop_assert_eq!(Jurisdiction::normalize_key(&once), once.clone());
        prop_assert!(!once.starts_with('-') && !once.ends_with('-'));
    }

    #[test]
    fn test_from_name_never_panics(name in "\\PC{0,40}") {
        let _ = Jurisdiction::from_name(&name);
        let _ = FuelType::parse(&name);
    }
}
