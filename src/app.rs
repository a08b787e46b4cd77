//! Application state and service initialization
//!
//! Centralizes service construction and dependency injection so the startup
//! path stays small and the graph is easy to test.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{GatewayClient, PositioningService};

/// Environment variable holding the gateway API key
const ENV_GATEWAY_API_KEY: &str = "GATEWAY_API_KEY";

/// Application state containing all services
pub struct AppState {
    /// Positioning copy generation service
    pub positioning_service: PositioningService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires `GATEWAY_API_KEY` in the environment; everything else falls
    /// back to configuration defaults.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_GATEWAY_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_GATEWAY_API_KEY))?;
        if api_key.trim().is_empty() {
            return Err(AppError::InvalidConfig("GATEWAY_API_KEY is empty"));
        }

        let gateway_client = GatewayClient::new(&config.gateway, api_key)
            .map_err(|e| AppError::GatewayInit(e.to_string()))?;

        let positioning_service = PositioningService::new(
            Arc::new(gateway_client),
            config.gateway.sanitize_positioning,
        );

        Ok(Self {
            positioning_service,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Gateway client construction failed
    #[error("Gateway client initialization failed: {0}")]
    GatewayInit(String),
}
