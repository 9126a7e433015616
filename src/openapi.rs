use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Served at `/api-docs/openapi.json` and rendered by Swagger UI under
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Greeting: `GET /v1/hello`
/// - Server Time: `GET /v1/time`
/// - Health Check: `GET /health`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello::hello,
        crate::routes::time::server_time,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::hello::HelloResponse,
            crate::models::time::TimeResponse,
            crate::models::health::HealthResponse,
        )
    ),
    tags(
        (name = "Greeting", description = "Static greeting endpoint"),
        (name = "Time", description = "Server clock endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Greeting, server time and health endpoints",
        title = "Greeting API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
