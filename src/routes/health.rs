use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, web};

/// # Health Check Endpoint
///
/// Liveness and readiness probe target. Sits outside the `/v1` scope and
/// never carries cross-origin headers.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: `{"status": "healthy"}`
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::read_only_resource("/health", health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        App,
        http::{Method, StatusCode, header::ALLOW},
        test,
    };
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Set up test app
        let app = test::init_service(App::new().configure(configure_routes)).await;

        // Create test request
        let req = test::TestRequest::get().uri("/health").to_request();

        // Execute request
        let resp = test::call_service(&app, req).await;

        // Verify status code
        assert_eq!(resp.status(), StatusCode::OK);

        // Verify response body
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = from_str(body_str).unwrap();

        assert_eq!(health_response, HealthResponse::healthy());
        assert_eq!(body_str, r#"{"status":"healthy"}"#);
    }

    #[actix_web::test]
    async fn test_health_rejects_post() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_health_answers_head() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::default()
            .method(Method::HEAD)
            .uri("/health")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_answers_options_with_allow() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/health")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(ALLOW).unwrap(), "GET, HEAD, OPTIONS");
    }
}
