// Test helpers shared by the unit and integration suites
//
// Usage (from a test file):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod variant_source;

pub use test_data::*;
pub use variant_source::*;

use rust_decimal::Decimal;
use serde_json::Value;

/// Reads a JSON number (serialized with arbitrary precision) as a Decimal
pub fn decimal_field(value: &Value) -> Decimal {
    value
        .to_string()
        .trim_matches('"')
        .parse()
        .unwrap_or_else(|_| panic!("Expected a decimal, got {}", value))
}
