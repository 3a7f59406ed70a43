use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::validate_amount;
use crate::core::{AppError, Result};
use crate::modules::pricing::models::PriceBreakdown;
use crate::modules::rto::models::{Assessment, VehicleProfile};
use crate::modules::rto::services::{tcs_for, RateResolver};
use crate::modules::variants::models::VehicleVariant;

/// Composes ex-showroom price, road tax, insurance, TCS and fixed
/// registration charges into an on-road price
///
/// TCS is added here, once, for every jurisdiction.
#[derive(Debug, Clone, Default)]
pub struct PriceComposer {
    resolver: RateResolver,
}

impl PriceComposer {
    pub fn new(resolver: RateResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &RateResolver {
        &self.resolver
    }

    /// On-road price for a CMS variant registered in `jurisdiction`
    pub fn calculate_on_road_price(
        &self,
        variant: &VehicleVariant,
        jurisdiction: &str,
    ) -> Result<PriceBreakdown> {
        let vehicle = variant
            .profile()
            .ok_or_else(|| AppError::pricing("Price information not available"))?;

        self.calculate(&vehicle, variant.insurance_premium, jurisdiction)
    }

    /// On-road price for explicit vehicle attributes
    pub fn calculate(
        &self,
        vehicle: &VehicleProfile,
        insurance: Decimal,
        jurisdiction: &str,
    ) -> Result<PriceBreakdown> {
        validate_amount("Insurance premium", insurance).map_err(AppError::Validation)?;

        let assessment = self.resolver.assess(jurisdiction, vehicle)?;
        let breakdown = Self::compose(vehicle, insurance, &assessment);

        debug!(
            jurisdiction = %assessment.jurisdiction,
            price = %breakdown.ex_showroom_price,
            rto_tax = %breakdown.rto_tax,
            tcs = %breakdown.tcs,
            total = %breakdown.total_on_road_price,
            "Composed on-road price"
        );

        Ok(breakdown)
    }

    /// Pure composition step, exposed for callers that already hold an assessment
    pub fn compose(
        vehicle: &VehicleProfile,
        insurance: Decimal,
        assessment: &Assessment,
    ) -> PriceBreakdown {
        let price = vehicle.ex_showroom_price;

        PriceBreakdown::new(
            price,
            assessment.total_tax(price),
            insurance,
            tcs_for(price),
        )
    }
}
