//! Directory service configuration.

use common::ServiceConfig;

/// Name reported by logs and the health check
pub const SERVICE_NAME: &str = "directory-service";

/// Prefix of the `*_HOST` / `*_PORT` environment variables
pub const ENV_PREFIX: &str = "DIRECTORY";

/// Port used when `DIRECTORY_PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Load configuration from environment variables.
pub fn from_env() -> ServiceConfig {
    ServiceConfig::from_env(ENV_PREFIX, SERVICE_NAME, DEFAULT_PORT)
}
