use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::rule_book::RuleBook;
use super::tcs::{tcs_for, TcsPolicy};
use crate::core::money::{round_inr, validate_amount};
use crate::core::{AppError, Result};
use crate::modules::rto::models::{Assessment, FuelType, Jurisdiction, Levy, VehicleProfile};

/// Maps (jurisdiction, vehicle) to the applicable road tax
///
/// Unknown jurisdictions and fuel types never fail: they resolve through the
/// default rule and each rule's catch-all fuel branch respectively. Only
/// inputs that cannot be taxed at all (negative price) are rejected.
#[derive(Debug, Clone)]
pub struct RateResolver {
    rule_book: Arc<RuleBook>,
    tcs_policy: TcsPolicy,
}

impl RateResolver {
    pub fn new(rule_book: Arc<RuleBook>, tcs_policy: TcsPolicy) -> Self {
        Self {
            rule_book,
            tcs_policy,
        }
    }

    /// Standard rule book with unified TCS
    pub fn standard() -> Self {
        Self::new(Arc::new(RuleBook::standard()), TcsPolicy::Unified)
    }

    pub fn with_tcs_policy(mut self, tcs_policy: TcsPolicy) -> Self {
        self.tcs_policy = tcs_policy;
        self
    }

    pub fn tcs_policy(&self) -> TcsPolicy {
        self.tcs_policy
    }

    /// Absolute RTO tax in rupees (paise precision) for free-text inputs
    pub fn resolve_rto_tax(
        &self,
        jurisdiction: &str,
        price: Decimal,
        fuel_type: &str,
        engine_size_cc: u32,
    ) -> Result<Decimal> {
        let vehicle = VehicleProfile::new(price, FuelType::parse(fuel_type), engine_size_cc);
        let assessment = self.assess(jurisdiction, &vehicle)?;

        Ok(round_inr(assessment.total_tax(price)))
    }

    /// Normalizes a free-text jurisdiction and evaluates its rule
    pub fn assess(&self, jurisdiction: &str, vehicle: &VehicleProfile) -> Result<Assessment> {
        self.assess_jurisdiction(Jurisdiction::from_name(jurisdiction), vehicle)
    }

    pub fn assess_jurisdiction(
        &self,
        jurisdiction: Jurisdiction,
        vehicle: &VehicleProfile,
    ) -> Result<Assessment> {
        validate_amount("Ex-showroom price", vehicle.ex_showroom_price)
            .map_err(AppError::Validation)?;

        let entry = self.rule_book.entry(jurisdiction);
        let mut assessment = (entry.assess)(vehicle);

        if self.tcs_policy == TcsPolicy::Legacy && entry.inline_tcs {
            let inline = tcs_for(vehicle.ex_showroom_price);
            if !inline.is_zero() {
                assessment = assessment.with_levy(Levy::inline_tcs(inline));
            }
        }

        debug!(
            jurisdiction = %assessment.jurisdiction,
            fuel_type = %vehicle.fuel_type,
            engine_size_cc = vehicle.engine_size_cc,
            price = %vehicle.ex_showroom_price,
            tax = ?assessment.tax,
            levies = assessment.levies.len(),
            "Resolved RTO tax rule"
        );

        Ok(assessment)
    }
}

impl Default for RateResolver {
    fn default() -> Self {
        Self::standard()
    }
}
