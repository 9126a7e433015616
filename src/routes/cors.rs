use crate::config::CorsPolicy;
use actix_cors::Cors;
use actix_web::middleware::Condition;

/// The only browser origin allowed to read `/v1/*` responses when the
/// policy is enabled.
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

const ALLOWED_METHODS: [&str; 7] = ["GET", "HEAD", "POST", "OPTIONS", "PUT", "PATCH", "DELETE"];

/// Cross-origin layer for the `/v1` scope.
///
/// With [`CorsPolicy::Disabled`] the wrapped service is called untouched and
/// no `Access-Control-*` headers are added.
pub fn policy_layer(policy: CorsPolicy) -> Condition<Cors> {
    Condition::new(policy.is_enabled(), localhost_cors())
}

fn localhost_cors() -> Cors {
    // Mismatched origins pass through without headers instead of a 400.
    Cors::default()
        .allowed_origin(ALLOWED_ORIGIN)
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
        .supports_credentials()
        .block_on_origin_mismatch(false)
}
