//! Request and response types for positioning copy generation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product positioning inputs collected from the client form
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositioningRequest {
    /// Name of the product being positioned
    pub product_name: String,
    /// Who the product is for
    pub target_audience: String,
    /// Top pain points the audience feels (free text)
    pub pain_points: String,
    /// Core benefit the product delivers
    pub product_benefit: String,
    /// Competitor names, comma or space separated (free text)
    #[serde(default)]
    pub competitors: String,
    /// What makes the product different
    #[serde(default)]
    pub differentiators: String,
}

/// Generated copy returned to the client
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PositioningCopy {
    /// Single-sentence positioning statement
    pub positioning: String,
    /// Three unique value propositions, newline separated
    pub uvp: String,
    /// Three slash-separated tagline phrases, 3-5 words each
    pub tagline: String,
    /// Brief strategic insight summary
    pub insights: String,
}
