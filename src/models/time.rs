use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Server Time Response
///
/// Both fields describe the same instant.
///
/// ## Fields
/// - `utc`: RFC 3339 timestamp with a `+00:00` offset; microseconds are
///   written only when non-zero
/// - `epoch_seconds`: whole seconds since 1970-01-01T00:00:00Z, truncated
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct TimeResponse {
    #[schema(example = "2024-05-01T12:30:45.123456+00:00")]
    pub utc: String,
    #[schema(example = 1714566645)]
    pub epoch_seconds: i64,
}

impl TimeResponse {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        let precision = if instant.timestamp_subsec_micros() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };

        Self {
            utc: instant.to_rfc3339_opts(precision, false),
            epoch_seconds: instant.timestamp(),
        }
    }
}
