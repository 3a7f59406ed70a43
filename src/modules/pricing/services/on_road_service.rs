use std::sync::Arc;

use futures_util::future::join_all;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::price_composer::PriceComposer;
use crate::core::{AppError, Result};
use crate::modules::locations::StateLocator;
use crate::modules::pricing::models::{Location, PriceBreakdown, QuoteRequest, VariantQuote};
use crate::modules::rto::models::{FuelType, VehicleProfile};
use crate::modules::variants::VariantSource;

/// Fetches variants from the content source and prices them
pub struct OnRoadPriceService {
    source: Arc<dyn VariantSource>,
    locator: Arc<dyn StateLocator>,
    composer: PriceComposer,
}

impl OnRoadPriceService {
    pub fn new(
        source: Arc<dyn VariantSource>,
        locator: Arc<dyn StateLocator>,
        composer: PriceComposer,
    ) -> Self {
        Self {
            source,
            locator,
            composer,
        }
    }

    pub fn composer(&self) -> &PriceComposer {
        &self.composer
    }

    /// State name to price against. Cities missing from the directory pass
    /// through unchanged and end up on the default rule.
    pub fn resolve_state(&self, location: &Location) -> String {
        match location {
            Location::State(state) => state.clone(),
            Location::City(city) => match self.locator.state_for_city(city) {
                Some(state) => state.to_string(),
                None => {
                    warn!(city = %city, "City not in directory, pricing with default rule");
                    city.clone()
                }
            },
        }
    }

    /// On-road price for one CMS variant
    pub async fn quote(&self, slug: &str, location: &Location) -> Result<PriceBreakdown> {
        let state = self.resolve_state(location);
        let variant = self.source.fetch_variant(slug).await?;
        let breakdown = self.composer.calculate_on_road_price(&variant, &state)?;

        info!(
            slug = %slug,
            state = %state,
            source = self.source.name(),
            total = %breakdown.total_on_road_price,
            "Calculated on-road price"
        );

        Ok(breakdown)
    }

    /// Prices several variants concurrently. A variant that cannot be priced
    /// gets the visitor-facing fallback instead of failing the whole list.
    pub async fn quote_many(&self, slugs: &[String], location: &Location) -> Vec<VariantQuote> {
        let quotes = slugs.iter().map(|slug| async move {
            match self.quote(slug, location).await {
                Ok(breakdown) => VariantQuote::priced(slug.clone(), breakdown),
                Err(err) => {
                    warn!(slug = %slug, error = %err, "Variant could not be priced");
                    VariantQuote::unavailable(slug.clone())
                }
            }
        });

        join_all(quotes).await
    }

    /// On-road price for attributes supplied directly by the caller
    pub fn quote_attributes(&self, request: &QuoteRequest) -> Result<PriceBreakdown> {
        let location = Location::from_parts(request.state.as_deref(), request.city.as_deref())?;
        let state = self.resolve_state(&location);

        let price = request
            .ex_showroom_price
            .filter(|price| !price.is_zero())
            .ok_or_else(|| AppError::pricing("Price information not available"))?;

        let vehicle = VehicleProfile::new(
            price,
            FuelType::from_optional(request.fuel_type.as_deref()),
            request.engine_size_cc.unwrap_or(0),
        );

        self.composer
            .calculate(&vehicle, request.insurance.unwrap_or(Decimal::ZERO), &state)
    }
}
