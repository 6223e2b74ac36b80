use actix_web::{HttpResponse, Responder, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::export;
use crate::models::{SanitizationReport, ValidationOptions};
use crate::sanitizer::EmailSanitizer;

/// # Sanitization Request
///
/// Raw address material plus optional pipeline switches. Each entry in
/// `emails` may itself contain several addresses separated by newlines,
/// commas or semicolons (pasted text or CSV cells); the pipeline splits and
/// normalizes them.
///
/// ## Example JSON
/// ```json
/// { "emails": ["a@b.com, A@B.com", "user@mailinator.com"], "options": { "checkMx": false } }
/// ```
#[derive(Debug, Deserialize, ToSchema)]
pub struct SanitizeRequest {
    pub emails: Vec<String>,
    #[serde(default)]
    pub options: ValidationOptions,
}

/// # Export Request
///
/// Addresses to render as a downloadable CSV; expected to be the
/// `validEmails` of a previous sanitization report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExportRequest {
    pub emails: Vec<String>,
}

/// # Batch Sanitization Endpoint
///
/// Runs the full sanitization pipeline over a raw address batch:
/// 1. Normalization (split on delimiters, trim, lowercase)
/// 2. Deduplication (first occurrence wins)
/// 3. Syntax check, disposable-domain check, DNS MX verification per address
///
/// Every check can be switched off through `options`; all default to on.
/// Addresses whose MX verification was inconclusive stay valid and are
/// repeated under `warnings` with an explanatory reason.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `emails` array and optional `options`
///
/// ## Responses
/// - **200 OK**: Complete partitioned report — every input address is
///   classified; data-quality problems never fail the request
///
/// ## Example Request
/// ```json
/// { "emails": ["a@b.com, bad-email"], "options": { "checkDisposable": true } }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/sanitize",
    request_body = SanitizeRequest,
    responses(
        (status = 200, description = "Partitioned sanitization report", body = SanitizationReport)
    ),
    tag = "Sanitization"
)]
#[post("/sanitize")]
pub async fn sanitize(
    req: web::Json<SanitizeRequest>,
    sanitizer: web::Data<EmailSanitizer>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    info!(%request_id, chunks = req.emails.len(), "sanitization request received");

    let report = sanitizer.sanitize(&req.emails, &req.options).await;

    info!(
        %request_id,
        valid = report.stats.valid,
        invalid = report.stats.invalid,
        duplicates = report.stats.duplicates,
        "sanitization request completed"
    );
    HttpResponse::Ok().json(report)
}

/// # CSV Export Endpoint
///
/// Renders a list of valid addresses as a one-column CSV download
/// (`email` header, one address per line). Formatting only — no validation
/// is performed here.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `emails` array
///
/// ## Responses
/// - **200 OK**: `text/csv` attachment
/// - **500 Internal Server Error**: CSV rendering failed
#[utoipa::path(
    post,
    path = "/api/v1/sanitize/export",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "One-column CSV of addresses", body = String, content_type = "text/csv"),
        (status = 500, description = "CSV rendering failed")
    ),
    tag = "Sanitization"
)]
#[post("/sanitize/export")]
pub async fn export_valid(req: web::Json<ExportRequest>) -> impl Responder {
    match export::valid_emails_csv(&req.emails) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"valid-emails.csv\"",
            ))
            .body(csv),
        Err(err) => {
            error!(%err, "CSV export failed");
            HttpResponse::InternalServerError().json(json!({
                "error": "EXPORT_FAILED",
                "message": err.to_string()
            }))
        }
    }
}

/// Configures sanitization routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(sanitize).service(export_valid);
}
