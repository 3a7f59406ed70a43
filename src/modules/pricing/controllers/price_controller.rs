use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::pricing::models::{Location, QuoteRequest};
use crate::modules::pricing::services::OnRoadPriceService;

/// Maximum number of variants priced in one listing request
const MAX_VARIANTS_PER_REQUEST: usize = 50;

/// Location query shared by the price endpoints
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub state: Option<String>,
    pub city: Option<String>,
}

impl LocationQuery {
    fn location(&self) -> Result<Location, AppError> {
        Location::from_parts(self.state.as_deref(), self.city.as_deref())
    }
}

/// Query for listing pages: comma-separated variant slugs plus location
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub variants: String,
    pub state: Option<String>,
    pub city: Option<String>,
}

/// On-road price for one variant
/// GET /on-road-price/{slug}?state=..|city=..
pub async fn get_on_road_price(
    service: web::Data<Arc<OnRoadPriceService>>,
    path: web::Path<String>,
    query: web::Query<LocationQuery>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let location = query.location()?;
    let breakdown = service.quote(&slug, &location).await?;

    Ok(HttpResponse::Ok().json(breakdown))
}

/// On-road prices for several variants
/// GET /on-road-price?variants=a,b,c&state=..|city=..
pub async fn list_on_road_prices(
    service: web::Data<Arc<OnRoadPriceService>>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse, AppError> {
    let location = Location::from_parts(query.state.as_deref(), query.city.as_deref())?;
    let slugs: Vec<String> = query
        .variants
        .split(',')
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(str::to_string)
        .collect();

    if slugs.is_empty() {
        return Err(AppError::validation("At least one variant slug is required"));
    }

    if slugs.len() > MAX_VARIANTS_PER_REQUEST {
        return Err(AppError::validation(format!(
            "At most {} variants can be priced per request",
            MAX_VARIANTS_PER_REQUEST
        )));
    }

    let quotes = service.quote_many(&slugs, &location).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "quotes": quotes })))
}

/// On-road price for caller-supplied attributes
/// POST /on-road-price/quote
pub async fn quote_attributes(
    service: web::Data<Arc<OnRoadPriceService>>,
    request: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let breakdown = service.quote_attributes(&request)?;

    Ok(HttpResponse::Ok().json(breakdown))
}

/// Configure on-road price routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/on-road-price")
            .route("", web::get().to(list_on_road_prices))
            .route("/quote", web::post().to(quote_attributes))
            .route("/{slug}", web::get().to(get_on_road_price)),
    );
}
