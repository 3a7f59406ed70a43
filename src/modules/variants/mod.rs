// Vehicle variants fetched from the content API

pub mod models;
pub mod services;

pub use models::VehicleVariant;
pub use services::{CmsClient, VariantSource};
