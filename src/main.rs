use actix_web::{App, HttpServer, web::Data};
use list_sanitizer::config::SanitizerConfig;
use list_sanitizer::openapi::ApiDoc;
use list_sanitizer::sanitizer::EmailSanitizer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// List Sanitizer Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Batch sanitization endpoints backed by the system DNS resolver
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Structured logging via `tracing` (filter with `RUST_LOG`)
///
/// # Endpoints
/// - Sanitization: `/api/v1/sanitize` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `HOST`:`PORT` (default `127.0.0.1:8080`)
/// - Pipeline knobs documented on [`SanitizerConfig`]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SanitizerConfig::from_env();
    info!(?config, "starting list-sanitizer");

    let sanitizer = EmailSanitizer::from_system_conf(config).map_err(std::io::Error::other)?;
    let sanitizer = Data::new(sanitizer);

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(8080);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(sanitizer.clone())
            .configure(list_sanitizer::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host, port))?
    .run()
    .await
}
