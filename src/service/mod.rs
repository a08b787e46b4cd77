pub mod gateway;
pub mod positioning;
pub mod tagline;

pub use gateway::{CompletionBackend, GatewayClient};
pub use positioning::PositioningService;
