use crate::models::TimeResponse;
use actix_web::{HttpResponse, Responder, web};
use tracing::debug;

/// # Server Time Endpoint
///
/// Captures the current UTC instant once per request and reports it both as
/// an ISO 8601 string and as epoch seconds.
///
/// ## Response
///
/// - **200 OK**: always
///   - Body: JSON object with `utc` and `epoch_seconds`
///
/// ## Example Response
///
/// ```json
/// {
///   "utc": "2024-05-01T12:30:45.123456+00:00",
///   "epoch_seconds": 1714566645
/// }
/// ```
#[utoipa::path(
    get,
    path = "/v1/time",
    responses(
        (status = 200, description = "Current server time in UTC", body = TimeResponse)
    ),
    tag = "Time"
)]
pub async fn server_time() -> impl Responder {
    let response = TimeResponse::now();
    debug!(epoch_seconds = response.epoch_seconds, "serving server time");
    HttpResponse::Ok().json(response)
}

/// Registers `GET /time` relative to the enclosing scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::read_only_resource("/time", server_time));
}
