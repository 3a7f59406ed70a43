//! Road-tax rate lookup endpoint
//!
//! Exposes the resolved rule for a jurisdiction so price pages can show
//! "RTO @ 11%" style labels next to the breakdown.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::core::money::round_inr;
use crate::modules::rto::models::{Assessment, FuelType, VehicleProfile};
use crate::modules::rto::services::RateResolver;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuery {
    pub price: Decimal,
    pub fuel_type: Option<String>,
    pub engine_size_cc: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub assessment: Assessment,
    pub vehicle: VehicleProfile,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rto_tax: Decimal,
}

/// Resolved road-tax rule and amount
///
/// GET /rto/rates/{state}?price=..&fuelType=..&engineSizeCc=..
pub async fn get_rate(
    resolver: web::Data<RateResolver>,
    path: web::Path<String>,
    query: web::Query<RateQuery>,
) -> Result<HttpResponse, AppError> {
    let vehicle = VehicleProfile::new(
        query.price,
        FuelType::from_optional(query.fuel_type.as_deref()),
        query.engine_size_cc.unwrap_or(0),
    );
    let assessment = resolver.assess(&path, &vehicle)?;
    let rto_tax = round_inr(assessment.total_tax(vehicle.ex_showroom_price));

    Ok(HttpResponse::Ok().json(RateResponse {
        assessment,
        vehicle,
        rto_tax,
    }))
}

/// Configure road-tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/rto").route("/rates/{state}", web::get().to(get_rate)));
}
