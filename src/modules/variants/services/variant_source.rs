use async_trait::async_trait;

use crate::core::Result;
use crate::modules::variants::models::VehicleVariant;

/// Source of vehicle variant data (the headless CMS in production)
#[async_trait]
pub trait VariantSource: Send + Sync {
    /// Fetch a variant by slug. Unknown slugs are `AppError::NotFound`.
    async fn fetch_variant(&self, slug: &str) -> Result<VehicleVariant>;

    /// Source name for logs
    fn name(&self) -> &str;
}
