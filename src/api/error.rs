//! Unified API error handling
//!
//! This module provides a consistent error response format across all API
//! endpoints.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::positioning::PositioningError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error
/// handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Gateway rate limit relayed to the client (429)
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    /// Gateway credits depleted (402)
    #[error("AI credits depleted. Please add funds to continue.")]
    CreditsExhausted,

    /// Upstream gateway error (502)
    #[error("AI gateway error: {0}")]
    Gateway(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::CreditsExhausted => StatusCode::PAYMENT_REQUIRED,
            ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::RateLimited => "rate_limited",
            ApiError::CreditsExhausted => "credits_exhausted",
            ApiError::Gateway(_) => "gateway_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<PositioningError> for ApiError {
    fn from(err: PositioningError) -> Self {
        match err {
            PositioningError::RateLimited => ApiError::RateLimited,
            PositioningError::CreditsExhausted => ApiError::CreditsExhausted,
            PositioningError::Gateway(msg) => ApiError::Gateway(msg),
        }
    }
}
