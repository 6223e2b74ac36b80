use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Batch Sanitization: `POST /api/v1/sanitize`
/// - CSV Export: `POST /api/v1/sanitize/export`
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::sanitize::sanitize,
        crate::routes::sanitize::export_valid,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::report::ValidationOptions,
            crate::models::report::ValidationResult,
            crate::models::report::ValidationStats,
            crate::models::report::SanitizationReport,
            crate::routes::sanitize::SanitizeRequest,
            crate::routes::sanitize::ExportRequest,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Sanitization", description = "Email list sanitization and export endpoints")
    ),
    info(
        description = "REST API for email list sanitization: deduplication, syntax checks, disposable-domain filtering and DNS MX verification",
        title = "List Sanitizer API",
        version = "0.4.0+sprint2",
    )
)]
pub struct ApiDoc;
