use std::collections::HashMap;

use super::rules::{self, central_east, north, northeast, south, west, TaxRule};
use crate::modules::rto::models::Jurisdiction;

/// A jurisdiction's rule plus what the legacy calculator did with TCS there
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    pub assess: TaxRule,
    /// Legacy branch added 1% TCS inline before returning
    pub inline_tcs: bool,
}

impl RuleEntry {
    pub fn new(assess: TaxRule) -> Self {
        Self {
            assess,
            inline_tcs: false,
        }
    }

    pub fn with_inline_tcs(assess: TaxRule) -> Self {
        Self {
            assess,
            inline_tcs: true,
        }
    }
}

/// Lookup table from jurisdiction to road-tax rule
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: HashMap<Jurisdiction, RuleEntry>,
    fallback: RuleEntry,
}

impl RuleBook {
    /// Empty book; every lookup resolves to `fallback`
    pub fn new(fallback: RuleEntry) -> Self {
        Self {
            rules: HashMap::new(),
            fallback,
        }
    }

    /// The published table for every supported state and union territory
    pub fn standard() -> Self {
        use Jurisdiction as J;

        let entries: [(Jurisdiction, RuleEntry); 32] = [
            (J::AndhraPradesh, RuleEntry::new(south::andhra_pradesh)),
            (J::ArunachalPradesh, RuleEntry::new(northeast::arunachal_pradesh)),
            (J::Assam, RuleEntry::new(northeast::assam)),
            (J::Bihar, RuleEntry::new(central_east::bihar)),
            (J::Chandigarh, RuleEntry::new(north::chandigarh)),
            (J::Chhattisgarh, RuleEntry::new(central_east::chhattisgarh)),
            (J::Delhi, RuleEntry::new(north::delhi)),
            (J::Goa, RuleEntry::new(west::goa)),
            (J::Gujarat, RuleEntry::new(west::gujarat)),
            (J::Haryana, RuleEntry::new(north::haryana)),
            (J::HimachalPradesh, RuleEntry::new(north::himachal_pradesh)),
            (J::JammuAndKashmir, RuleEntry::new(north::jammu_and_kashmir)),
            (J::Jharkhand, RuleEntry::new(central_east::jharkhand)),
            (J::Karnataka, RuleEntry::new(south::karnataka)),
            (J::Kerala, RuleEntry::new(south::kerala)),
            (J::MadhyaPradesh, RuleEntry::new(central_east::madhya_pradesh)),
            (J::Maharashtra, RuleEntry::new(west::maharashtra)),
            (J::Manipur, RuleEntry::new(northeast::manipur)),
            (J::Meghalaya, RuleEntry::new(northeast::meghalaya)),
            (J::Mizoram, RuleEntry::new(northeast::mizoram)),
            (J::Nagaland, RuleEntry::new(northeast::nagaland)),
            (J::Odisha, RuleEntry::new(central_east::odisha)),
            (J::Puducherry, RuleEntry::new(south::puducherry)),
            (J::Punjab, RuleEntry::new(north::punjab)),
            (J::Rajasthan, RuleEntry::new(north::rajasthan)),
            (J::Sikkim, RuleEntry::new(northeast::sikkim)),
            (J::TamilNadu, RuleEntry::with_inline_tcs(south::tamil_nadu)),
            (J::Telangana, RuleEntry::new(south::telangana)),
            (J::Tripura, RuleEntry::new(northeast::tripura)),
            (J::UttarPradesh, RuleEntry::new(north::uttar_pradesh)),
            (J::Uttarakhand, RuleEntry::with_inline_tcs(north::uttarakhand)),
            (J::WestBengal, RuleEntry::with_inline_tcs(central_east::west_bengal)),
        ];

        let mut book = Self::new(RuleEntry::with_inline_tcs(rules::default_rule));
        for (jurisdiction, entry) in entries {
            book = book.with_rule(jurisdiction, entry);
        }
        book
    }

    /// Adds or replaces the rule for a jurisdiction
    pub fn with_rule(mut self, jurisdiction: Jurisdiction, entry: RuleEntry) -> Self {
        self.rules.insert(jurisdiction, entry);
        self
    }

    /// Rule for a jurisdiction, or the fallback rule when none is registered
    pub fn entry(&self, jurisdiction: Jurisdiction) -> &RuleEntry {
        self.rules.get(&jurisdiction).unwrap_or(&self.fallback)
    }

    pub fn has_rule(&self, jurisdiction: Jurisdiction) -> bool {
        self.rules.contains_key(&jurisdiction)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}
