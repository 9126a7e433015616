/// # Greeting Response
///
/// Static body of `GET /v1/hello`.
///
/// ## Example JSON
/// ```json
/// { "message": "hi there", "status": "success" }
/// ```
pub mod hello;

/// # Health Status Response
///
/// Body of the `GET /health` liveness probe.
///
/// ## Example JSON
/// ```json
/// { "status": "healthy" }
/// ```
pub mod health;

/// # Server Time Response
///
/// Body of `GET /v1/time`, built from a single captured instant.
///
/// ## Example JSON
/// ```json
/// { "utc": "2024-05-01T12:30:45.123456+00:00", "epoch_seconds": 1714566645 }
/// ```
pub mod time;

pub use health::HealthResponse;
pub use hello::HelloResponse;
pub use time::TimeResponse;
