use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use tracing::{debug, warn};

use super::variant_source::VariantSource;
use crate::config::CmsConfig;
use crate::core::{AppError, Result};
use crate::modules::variants::models::{CmsVariantPayload, VehicleVariant};

/// Content API client for vehicle variants
///
/// `GET {base_url}/variants/{slug}`, retried with exponential backoff on
/// transient failures (connect errors, 5xx, 429).
pub struct CmsClient {
    client: ClientWithMiddleware,
    base_url: Url,
    api_token: Option<String>,
}

impl CmsClient {
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("autoprice/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid CMS_BASE_URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "CMS_BASE_URL cannot be used as a base URL: {}",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    /// Variant endpoint with the slug as a single percent-encoded path
    /// segment, so it can never add path levels or a query string
    pub fn variant_url(&self, slug: &str) -> Result<Url> {
        if slug == "." || slug == ".." {
            return Err(AppError::validation(format!("Invalid variant slug: {}", slug)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("CMS base URL cannot carry a path"))?
            .pop_if_empty()
            .push("variants")
            .push(slug);

        Ok(url)
    }
}

#[async_trait]
impl VariantSource for CmsClient {
    async fn fetch_variant(&self, slug: &str) -> Result<VehicleVariant> {
        if slug.trim().is_empty() {
            return Err(AppError::validation("Variant slug cannot be empty"));
        }

        let url = self.variant_url(slug)?;
        debug!(slug = %slug, url = %url, "Fetching variant from CMS");

        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Variant '{}'", slug)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(slug = %slug, status = %status, body = %body, "CMS returned an error response");
            return Err(AppError::cms(format!(
                "Variant lookup failed with status {}",
                status.as_u16()
            )));
        }

        let payload: CmsVariantPayload = response
            .json()
            .await
            .map_err(|e| AppError::cms(format!("Failed to parse variant payload: {}", e)))?;

        VehicleVariant::from_payload(slug, &payload)
    }

    fn name(&self) -> &str {
        "cms"
    }
}
