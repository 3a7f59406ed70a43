// Road tax (RTO) rules and resolution

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Assessment, FuelType, Jurisdiction, TaxResult, VehicleProfile};
pub use services::{RateResolver, RuleBook, TcsPolicy};
