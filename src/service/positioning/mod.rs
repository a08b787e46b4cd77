//! Positioning copy orchestration
//!
//! Fans out the four prompt templates to the gateway concurrently, waits for
//! all of them, then applies the post-processing policy: markdown scrub for
//! the prose fields and the full tagline normalizer for the tagline field.

use std::sync::Arc;

use crate::model::{PositioningCopy, PositioningRequest};
use crate::service::gateway::{CompletionBackend, CompletionRequest};
use crate::service::tagline;

mod error;
mod prompts;
mod scrub;

pub use error::PositioningError;

use prompts::{
    build_insights_prompt, build_positioning_prompt, build_sanitize_prompt, build_tagline_prompt,
    build_uvp_prompt, INSIGHTS_SYSTEM_PROMPT, SANITIZE_SYSTEM_PROMPT,
};
use scrub::scrub;

/// Temperature for the positioning statement and sanitize calls
const POSITIONING_TEMPERATURE: f32 = 0.2;

/// Service generating the four positioning copy fields
pub struct PositioningService {
    backend: Arc<dyn CompletionBackend>,
    sanitize_positioning: bool,
}

impl PositioningService {
    /// Create the service over a completion backend
    pub fn new(backend: Arc<dyn CompletionBackend>, sanitize_positioning: bool) -> Self {
        tracing::info!(
            sanitize_positioning = sanitize_positioning,
            "Positioning service initialized"
        );

        Self {
            backend,
            sanitize_positioning,
        }
    }

    /// Generate all four copy fields for one request
    ///
    /// The four completions run concurrently; the first gateway error wins
    /// and is surfaced by category. The tagline reply is normalized with the
    /// request's competitor list as the brand list.
    pub async fn generate(
        &self,
        request: &PositioningRequest,
    ) -> Result<PositioningCopy, PositioningError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            product = %request.product_name,
            "Generating positioning copy"
        );

        let calls = vec![
            self.backend.complete(
                CompletionRequest::new(build_positioning_prompt(request))
                    .with_temperature(POSITIONING_TEMPERATURE),
            ),
            self.backend
                .complete(CompletionRequest::new(build_uvp_prompt(request))),
            self.backend
                .complete(CompletionRequest::new(build_tagline_prompt(request))),
            self.backend.complete(
                CompletionRequest::new(build_insights_prompt(request))
                    .with_system(INSIGHTS_SYSTEM_PROMPT),
            ),
        ];

        let mut replies = futures::future::try_join_all(calls).await?;

        // Same order as the calls above
        let insights_raw = replies.pop().unwrap_or_default();
        let tagline_raw = replies.pop().unwrap_or_default();
        let uvp_raw = replies.pop().unwrap_or_default();
        let positioning_raw = replies.pop().unwrap_or_default();

        tracing::debug!(tagline_raw = %tagline_raw, "Raw tagline reply");

        let mut positioning = scrub(&positioning_raw);
        if self.sanitize_positioning {
            positioning = self.sanitize(positioning, request).await;
        }

        let tagline = tagline::format_tagline(&tagline_raw, &request.competitors);

        let copy = PositioningCopy {
            positioning,
            uvp: scrub(&uvp_raw),
            tagline,
            insights: scrub(&insights_raw),
        };

        tracing::info!(
            product = %request.product_name,
            elapsed_ms = start_time.elapsed().as_millis(),
            "Positioning copy generated"
        );

        Ok(copy)
    }

    /// Rewrite the positioning draft without brand names
    ///
    /// Non-fatal: on gateway failure or an empty rewrite the draft is kept.
    async fn sanitize(&self, draft: String, request: &PositioningRequest) -> String {
        let call = CompletionRequest::new(build_sanitize_prompt(&draft, &request.competitors))
            .with_system(SANITIZE_SYSTEM_PROMPT)
            .with_temperature(POSITIONING_TEMPERATURE);

        match self.backend.complete(call).await {
            Ok(rewritten) if !rewritten.trim().is_empty() => scrub(&rewritten),
            Ok(_) => {
                tracing::warn!("Sanitize pass returned empty text, keeping draft");
                draft
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sanitize pass failed, keeping draft");
                draft
            }
        }
    }
}
