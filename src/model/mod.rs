pub mod config;
pub mod positioning;

pub use config::{Config, GatewayConfig};
pub use positioning::{PositioningCopy, PositioningRequest};
