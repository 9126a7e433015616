use std::env;
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const BIND_HOST: &str = "0.0.0.0";

const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];

/// Whether the application itself emits cross-origin headers on `/v1/*`.
///
/// Decided once at startup. When disabled the service expects a gateway in
/// front of it to add the headers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    Enabled,
    #[default]
    Disabled,
}

impl CorsPolicy {
    /// Maps the raw `ENABLE_CORS` value to a policy. Anything outside the
    /// truthy set, including an absent variable, disables it.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some(raw) if TRUTHY.contains(&raw.to_lowercase().as_str()) => Self::Enabled,
            _ => Self::Disabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// # Startup Configuration
///
/// Everything the server reads from its environment, captured once before
/// the HTTP server is built.
///
/// ## Variables
/// - `PORT`: listen port, defaults to `5000`
/// - `ENABLE_CORS`: `1`, `true`, `yes` or `on` (any case) enables [`CorsPolicy::Enabled`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub cors: CorsPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors: CorsPolicy::Disabled,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };
        let cors = CorsPolicy::from_flag(lookup("ENABLE_CORS").as_deref());

        Ok(Self { port, cors })
    }

    pub fn bind_addr(&self) -> (&'static str, u16) {
        (BIND_HOST, self.port)
    }
}
