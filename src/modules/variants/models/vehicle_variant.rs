//! Vehicle variant as delivered by the content API
//!
//! The CMS returns loosely typed product JSON: prices may be numbers or
//! numeric strings (empty when unset) and vehicle specs live in an
//! `attributes` array keyed by `attribute_slug`. [`CmsVariantPayload`]
//! mirrors that shape; [`VehicleVariant`] is the typed view the pricing
//! code works with.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{AppError, Result};
use crate::modules::rto::models::{FuelType, VehicleProfile};

pub const FUEL_TYPE_ATTRIBUTE: &str = "pa_fuel-type";
pub const ENGINE_SIZE_ATTRIBUTE: &str = "pa_engine-size";

/// One product attribute from the content API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsAttribute {
    pub attribute_slug: String,
    #[serde(default)]
    pub attribute_values: Vec<String>,
}

/// Raw variant payload from the content API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsVariantPayload {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub insurance: Option<Value>,
    #[serde(default)]
    pub attributes: Vec<CmsAttribute>,
}

impl CmsVariantPayload {
    /// First value of the attribute with the given slug
    pub fn attribute(&self, slug: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.attribute_slug == slug)
            .and_then(|attribute| attribute.attribute_values.first())
            .map(String::as_str)
    }
}

/// Vehicle variant attributes that feed the on-road price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleVariant {
    pub slug: String,
    /// `None` when the CMS has no usable price for this variant
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub ex_showroom_price: Option<Decimal>,
    pub fuel_type: FuelType,
    pub engine_size_cc: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub insurance_premium: Decimal,
}

impl VehicleVariant {
    pub fn new(
        slug: impl Into<String>,
        ex_showroom_price: Option<Decimal>,
        fuel_type: FuelType,
        engine_size_cc: u32,
        insurance_premium: Decimal,
    ) -> Self {
        Self {
            slug: slug.into(),
            ex_showroom_price,
            fuel_type,
            engine_size_cc,
            insurance_premium,
        }
    }

    /// Builds the typed variant from a CMS payload.
    ///
    /// Missing fuel type becomes `Other`, missing engine size becomes 0 and
    /// missing insurance becomes 0. A malformed (non-numeric) price or
    /// insurance value is a CMS error rather than a silent zero.
    pub fn from_payload(slug: &str, payload: &CmsVariantPayload) -> Result<Self> {
        let ex_showroom_price = parse_amount("price", payload.price.as_ref())?;
        let insurance_premium =
            parse_amount("insurance", payload.insurance.as_ref())?.unwrap_or(Decimal::ZERO);

        Ok(Self {
            slug: payload.slug.clone().unwrap_or_else(|| slug.to_string()),
            ex_showroom_price,
            fuel_type: FuelType::from_optional(payload.attribute(FUEL_TYPE_ATTRIBUTE)),
            engine_size_cc: payload
                .attribute(ENGINE_SIZE_ATTRIBUTE)
                .map(parse_engine_size)
                .unwrap_or(0),
            insurance_premium,
        })
    }

    /// Price usable for tax purposes: present and non-zero
    pub fn priced(&self) -> Option<Decimal> {
        self.ex_showroom_price.filter(|price| !price.is_zero())
    }

    /// Rule input for the rate resolver, if the variant has a price
    pub fn profile(&self) -> Option<VehicleProfile> {
        self.priced()
            .map(|price| VehicleProfile::new(price, self.fuel_type, self.engine_size_cc))
    }
}

/// Reads an amount that may be a JSON number, a numeric string, an empty
/// string or null
fn parse_amount(field: &str, value: Option<&Value>) -> Result<Option<Decimal>> {
    let text = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Bool(false)) => return Ok(None),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(None),
        Some(Value::String(text)) => text.trim().replace(',', ""),
        Some(other) => {
            return Err(AppError::cms(format!(
                "Unexpected {} value in variant payload: {}",
                field, other
            )))
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|_| AppError::cms(format!("Invalid {} in variant payload: {}", field, text)))
}

/// Leading digits of an engine-size attribute: `"1,197 cc"` -> 1197.
/// Values without digits (`"N/A"`, electric motors) read as 0.
pub fn parse_engine_size(value: &str) -> u32 {
    value
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}
