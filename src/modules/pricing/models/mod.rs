pub mod price_breakdown;
pub mod quote;

pub use price_breakdown::{PriceBreakdown, FASTAG_CHARGES, HYPOTHECATION_CHARGES};
pub use quote::{Location, QuoteRequest, VariantQuote, PRICE_UNAVAILABLE_MESSAGE};
