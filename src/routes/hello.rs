use crate::models::HelloResponse;
use actix_web::{HttpResponse, Responder, web};
use tracing::debug;

/// # Greeting Endpoint
///
/// ## Response
///
/// - **200 OK**: always
///   - Body: `{"message": "hi there", "status": "success"}`
#[utoipa::path(
    get,
    path = "/v1/hello",
    responses(
        (status = 200, description = "Static greeting", body = HelloResponse)
    ),
    tag = "Greeting"
)]
pub async fn hello() -> impl Responder {
    debug!("serving greeting");
    HttpResponse::Ok().json(HelloResponse::greeting())
}

/// Registers `GET /hello` relative to the enclosing scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::read_only_resource("/hello", hello));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_hello_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");
        assert_eq!(body_json, json!({ "message": "hi there", "status": "success" }));
    }

    #[actix_web::test]
    async fn test_hello_rejects_other_methods() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        for req in [
            test::TestRequest::post().uri("/hello").to_request(),
            test::TestRequest::put().uri("/hello").to_request(),
            test::TestRequest::delete().uri("/hello").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        }
    }
}
