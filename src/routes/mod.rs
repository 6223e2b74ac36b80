use actix_web::web;

/// Health check endpoint.
pub mod health;

/// Batch sanitization and CSV export endpoints.
pub mod sanitize;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - `GET /api/v1/health` — service health status
/// - `POST /api/v1/sanitize` — batch sanitization
/// - `POST /api/v1/sanitize/export` — CSV export of valid addresses
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(sanitize::configure_routes),
    );
}
