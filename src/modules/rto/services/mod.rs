pub mod rate_resolver;
pub mod rule_book;
pub mod rules;
pub mod tcs;

pub use rate_resolver::RateResolver;
pub use rule_book::{RuleBook, RuleEntry};
pub use rules::TaxRule;
pub use tcs::{tcs_for, TcsPolicy, TCS_THRESHOLD};
