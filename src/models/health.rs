use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the liveness of the service. The process only answers when it
/// is up, so the only constructed value is [`HealthResponse::healthy`].
///
/// ## Fields
/// - `status`: always `"healthy"`
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
