use axum_helpers::{ErrorCode, ErrorResponse, HealthResponse};
use utoipa::OpenApi;

/// The explorer's own API documentation, served when no external schema is configured
#[derive(OpenApi)]
#[openapi(
    info(title = "explorer", description = "Interactive API explorer"),
    paths(axum_helpers::server::health::health_handler),
    components(schemas(HealthResponse, ErrorResponse, ErrorCode)),
    tags((name = "health", description = "Liveness endpoints"))
)]
pub struct ApiDoc;
