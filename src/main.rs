use actix_web::{App, HttpServer, middleware::Logger};
use greeting_api::config::AppConfig;
use greeting_api::openapi::ApiDoc;
use greeting_api::{routes, telemetry};
use std::io;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Greeting API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - `/v1/hello`, `/v1/time` and `/health`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:$PORT`, `PORT` defaulting to `5000`
/// - `ENABLE_CORS` toggles the cross-origin layer on `/v1/*`
/// - `RUST_LOG` sets the log filter
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let (host, port) = config.bind_addr();
    info!(host, port, cors_enabled = config.cors.is_enabled(), "starting greeting api");

    let cors = config.cors;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes::configure(cfg, cors))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
