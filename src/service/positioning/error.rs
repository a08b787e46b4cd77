//! Error types for positioning copy generation

use thiserror::Error;

use crate::service::gateway::GatewayError;

/// Error categories surfaced to the API layer
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PositioningError {
    /// The gateway rate limited one of the completion calls
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    /// The gateway account has no credits left
    #[error("AI credits depleted. Please add funds to continue.")]
    CreditsExhausted,

    /// Any other gateway failure
    #[error("AI gateway error: {0}")]
    Gateway(String),
}

impl From<GatewayError> for PositioningError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => PositioningError::RateLimited,
            GatewayError::CreditsExhausted => PositioningError::CreditsExhausted,
            GatewayError::Upstream(msg) => PositioningError::Gateway(msg),
            GatewayError::Http(e) => PositioningError::Gateway(e.to_string()),
        }
    }
}
