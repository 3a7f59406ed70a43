use actix_web::{error, web, HttpRequest};

use crate::core::AppError;

/// Malformed JSON bodies get the same error envelope as handler errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Malformed query strings get the same error envelope as handler errors
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    log_error(&err);
    AppError::validation(err.to_string()).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    log_error(&err);
    AppError::validation(err.to_string()).into()
}

fn log_error(err: &dyn std::fmt::Display) {
    tracing::debug!(error = %err, "Rejected request payload");
}
