use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    pub status: String,
}

impl HelloResponse {
    pub fn greeting() -> Self {
        Self {
            message: "hi there".to_string(),
            status: "success".to_string(),
        }
    }
}
