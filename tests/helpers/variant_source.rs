// In-memory variant source
//
// Stands in for the content API so service and endpoint tests run without
// network access.

use std::collections::HashMap;

use async_trait::async_trait;

use autoprice::core::{AppError, Result};
use autoprice::variants::{VariantSource, VehicleVariant};

pub struct InMemoryVariantSource {
    variants: HashMap<String, VehicleVariant>,
}

impl InMemoryVariantSource {
    pub fn new(variants: Vec<VehicleVariant>) -> Self {
        Self {
            variants: variants
                .into_iter()
                .map(|variant| (variant.slug.clone(), variant))
                .collect(),
        }
    }
}

#[async_trait]
impl VariantSource for InMemoryVariantSource {
    async fn fetch_variant(&self, slug: &str) -> Result<VehicleVariant> {
        self.variants
            .get(slug)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Variant {}", slug)))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
