// On-road price composition

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Location, PriceBreakdown, QuoteRequest, VariantQuote};
pub use services::{OnRoadPriceService, PriceComposer};
