use crate::core::{AppError, Result};
use std::env;

/// Connection settings for the content management system that holds
/// vehicle variants
#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl CmsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("CMS_BASE_URL")
                .map_err(|_| AppError::Configuration("CMS_BASE_URL not set".to_string()))?,
            api_token: env::var("CMS_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            timeout_secs: env::var("CMS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid CMS_TIMEOUT_SECS".to_string()))?,
            max_retries: env::var("CMS_MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid CMS_MAX_RETRIES".to_string()))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::Configuration(format!(
                "CMS_BASE_URL must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "CMS timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
