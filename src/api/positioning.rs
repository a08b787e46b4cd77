//! REST API endpoint for positioning copy generation

use actix_web::{post, web, HttpResponse};
use utoipa::OpenApi;

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::{PositioningCopy, PositioningRequest};
use crate::service::PositioningService;

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    paths(
        generate_positioning,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(
        PositioningRequest,
        PositioningCopy,
        ErrorResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth
    )),
    tags(
        (name = "positioning", description = "Positioning copy generation"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Generate positioning copy from product inputs
#[utoipa::path(
    post,
    path = "/v1/positioning",
    request_body = PositioningRequest,
    responses(
        (status = 200, description = "Copy generated successfully", body = PositioningCopy),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 402, description = "Gateway credits depleted", body = ErrorResponse),
        (status = 429, description = "Gateway rate limit exceeded", body = ErrorResponse),
        (status = 502, description = "Gateway error", body = ErrorResponse)
    ),
    tag = "positioning"
)]
#[post("/v1/positioning")]
pub async fn generate_positioning(
    service: web::Data<PositioningService>,
    body: web::Json<PositioningRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    validate_request(&request)?;

    let copy = service.generate(&request).await?;
    Ok(HttpResponse::Ok().json(copy))
}

/// Reject requests with empty core fields before spending gateway calls
fn validate_request(request: &PositioningRequest) -> Result<(), ApiError> {
    let required = [
        ("productName", &request.product_name),
        ("targetAudience", &request.target_audience),
        ("productBenefit", &request.product_benefit),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ApiError::BadRequest(format!(
                "Field '{}' must not be empty",
                field
            )));
        }
    }

    Ok(())
}

/// Configure positioning routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_positioning);
}
