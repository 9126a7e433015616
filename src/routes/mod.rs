use crate::config::CorsPolicy;
use actix_web::http::{Method, header};
use actix_web::{FromRequest, Handler, HttpResponse, Resource, Responder, web};

/// Cross-origin layer applied to the `/v1` scope when `ENABLE_CORS` is truthy.
pub mod cors;

/// # Health Check Endpoint
///
/// `GET /health`, mounted at the root and never wrapped by the
/// cross-origin layer.
pub mod health;

/// # Greeting Endpoint
///
/// `GET /v1/hello`, returns a fixed greeting.
pub mod hello;

/// # Server Time Endpoint
///
/// `GET /v1/time`, returns the current UTC time.
pub mod time;


/// # API Route Configuration
///
/// ## Mounted Services
/// - `/v1` scope: greeting and server time, wrapped by [`cors::policy_layer`]
/// - `/health`: liveness probe
///
/// Unknown paths fall through to actix-web's default 404. Known paths hit
/// with a method other than `GET`, `HEAD` or `OPTIONS` get the resource
/// default of 405.
///
/// ```text
/// GET /v1/hello - Greeting
/// GET /v1/time  - Server time
/// GET /health   - Service health status
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, cors: CorsPolicy) {
    cfg.service(
        web::scope("/v1")
            .wrap(cors::policy_layer(cors))
            .configure(hello::configure_routes)
            .configure(time::configure_routes),
    )
    .configure(health::configure_routes);
}

const READ_ONLY_ALLOW: &str = "GET, HEAD, OPTIONS";

/// Builds a read-only resource: `GET` and `HEAD` reach `handler`, `OPTIONS`
/// is answered with the allowed methods, anything else is a 405.
///
/// The server drops the body of `HEAD` responses on the wire.
pub(crate) fn read_only_resource<F, Args>(path: &str, handler: F) -> Resource
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    web::resource(path)
        .route(web::get().to(handler.clone()))
        .route(web::head().to(handler))
        .route(web::route().method(Method::OPTIONS).to(allowed_methods))
}

async fn allowed_methods() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, READ_ONLY_ALLOW))
        .finish()
}
